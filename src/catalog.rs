//! Built-in coloring templates, grouped by age.
//!
//! Every outline ships as a 2048x2048 PNG under `/assets/generated/`.

use crate::model::{AgeGroup, Template};

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

struct Entry {
    group: AgeGroup,
    slug: &'static str,
    name: &'static str,
    /// File stem after the `coloring-<group>-` prefix.
    file: &'static str,
}

const fn entry(group: AgeGroup, slug: &'static str, name: &'static str, file: &'static str) -> Entry {
    Entry { group, slug, name, file }
}

impl Entry {
    fn id(&self) -> String {
        format!("fallback-{}-{}", self.group.label(), self.slug)
    }

    fn to_template(&self) -> Template {
        Template {
            id: self.id(),
            name: self.name.to_string(),
            image_url: format!(
                "/assets/generated/coloring-{}-{}.dim_2048x2048.png",
                self.group.label(),
                self.file
            ),
            age_group: self.group,
        }
    }
}

#[rustfmt::skip]
static CATALOG: &[Entry] = &[
    // 3-5
    entry(AgeGroup::Toddler, "kitten", "Cute Kitten", "01-kitten"),
    entry(AgeGroup::Toddler, "train", "Toy Train", "02-train"),
    entry(AgeGroup::Toddler, "puppy", "Smiling Puppy", "03-puppy"),
    entry(AgeGroup::Toddler, "turtle", "Friendly Turtle", "04-turtle"),
    entry(AgeGroup::Toddler, "car", "Happy Balloon Car", "05-car"),
    entry(AgeGroup::Toddler, "bunny", "Cute Smiling Bunny", "06-bunny"),
    entry(AgeGroup::Toddler, "dolphin", "Friendly Baby Dolphin", "07-dolphin"),
    entry(AgeGroup::Toddler, "teddy", "Happy Teddy Bear", "08-teddy"),
    entry(AgeGroup::Toddler, "turtle-new", "Cheerful Turtle", "09-turtle"),
    entry(AgeGroup::Toddler, "elephant-new", "Baby Elephant", "10-elephant"),
    entry(AgeGroup::Toddler, "ladybug", "Cute Ladybug", "11-ladybug"),
    entry(AgeGroup::Toddler, "snail", "Friendly Snail", "12-snail"),
    entry(AgeGroup::Toddler, "penguin", "Happy Penguin", "13-penguin"),
    entry(AgeGroup::Toddler, "sun", "Smiling Sun", "14-sun"),
    entry(AgeGroup::Toddler, "ice-cream", "Sweet Ice Cream", "15-ice-cream"),
    entry(AgeGroup::Toddler, "fish", "Cute Fish", "16-fish"),
    entry(AgeGroup::Toddler, "duck", "Smiling Duck", "17-duck"),
    entry(AgeGroup::Toddler, "dino", "Friendly Dinosaur", "18-dino"),
    entry(AgeGroup::Toddler, "cupcake", "Happy Cupcake", "19-cupcake"),
    entry(AgeGroup::Toddler, "bee", "Cute Smiling Bee", "20-bee"),
    entry(AgeGroup::Toddler, "baby-dino", "Friendly Baby Dinosaur", "21-baby-dino"),
    entry(AgeGroup::Toddler, "sailboat", "Happy Little Sailboat", "22-sailboat"),
    // 6-8
    entry(AgeGroup::EarlyReader, "elephant", "Friendly Elephant", "01-elephant"),
    entry(AgeGroup::EarlyReader, "rocket", "Rocket Ship", "02-rocket"),
    entry(AgeGroup::EarlyReader, "giraffe", "Friendly Giraffe", "03-giraffe"),
    entry(AgeGroup::EarlyReader, "submarine", "Cute Submarine", "04-submarine"),
    entry(AgeGroup::EarlyReader, "wizard-hat", "Wizard Hat Character", "05-wizard-hat"),
    entry(AgeGroup::EarlyReader, "panda", "Playful Panda", "06-panda"),
    entry(AgeGroup::EarlyReader, "hot-air-balloon", "Cute Hot Air Balloon", "07-hot-air-balloon"),
    entry(AgeGroup::EarlyReader, "castle", "Smiling Castle", "08-castle"),
    entry(AgeGroup::EarlyReader, "dinosaur", "Friendly Dinosaur", "09-dinosaur"),
    entry(AgeGroup::EarlyReader, "fire-truck", "Fire Truck", "10-fire-truck"),
    entry(AgeGroup::EarlyReader, "rocket-new", "Space Rocket", "11-rocket"),
    entry(AgeGroup::EarlyReader, "koala", "Cute Koala", "12-koala"),
    entry(AgeGroup::EarlyReader, "airplane", "Flying Airplane", "13-airplane"),
    entry(AgeGroup::EarlyReader, "cactus", "Happy Cactus", "14-cactus"),
    entry(AgeGroup::EarlyReader, "whale", "Friendly Whale", "15-whale"),
    entry(AgeGroup::EarlyReader, "alien-ufo", "Alien UFO", "16-alien-ufo"),
    entry(AgeGroup::EarlyReader, "monkey", "Playful Monkey", "17-monkey"),
    entry(AgeGroup::EarlyReader, "bicycle", "Smiling Bicycle", "18-bicycle"),
    entry(AgeGroup::EarlyReader, "octopus", "Friendly Octopus", "19-octopus"),
    entry(AgeGroup::EarlyReader, "astronaut", "Cute Astronaut Waving", "20-astronaut"),
    entry(AgeGroup::EarlyReader, "friendly-dragon", "Friendly Dragon", "21-friendly-dragon"),
    entry(AgeGroup::EarlyReader, "ice-cream-truck", "Smiling Ice Cream Truck", "22-ice-cream-truck"),
    // 9-12
    entry(AgeGroup::Preteen, "dinosaur", "Cheerful Dinosaur", "01-dinosaur"),
    entry(AgeGroup::Preteen, "robot", "Friendly Robot", "02-robot"),
    entry(AgeGroup::Preteen, "unicorn", "Cheerful Unicorn", "03-unicorn"),
    entry(AgeGroup::Preteen, "astronaut", "Space Explorer", "04-astronaut"),
    entry(AgeGroup::Preteen, "camera", "Vintage Camera", "05-camera"),
    entry(AgeGroup::Preteen, "octopus", "Friendly Octopus", "06-octopus"),
    entry(AgeGroup::Preteen, "planet", "Cute Smiling Planet", "07-planet"),
    entry(AgeGroup::Preteen, "skateboard", "Cheerful Skateboard", "08-skateboard"),
    entry(AgeGroup::Preteen, "sea-turtle", "Sea Turtle", "09-sea-turtle"),
    entry(AgeGroup::Preteen, "robot-new", "Cool Robot", "10-robot"),
    entry(AgeGroup::Preteen, "dragon", "Friendly Dragon", "11-dragon"),
    entry(AgeGroup::Preteen, "castle-tower", "Castle Tower", "12-castle-tower"),
    entry(AgeGroup::Preteen, "robot-dog", "Robot Dog", "13-robot-dog"),
    entry(AgeGroup::Preteen, "mountain", "Mountain Landscape", "14-mountain"),
    entry(AgeGroup::Preteen, "helmet", "Adventure Helmet", "15-helmet"),
    entry(AgeGroup::Preteen, "dragon-egg", "Dragon Egg", "16-dragon-egg"),
    entry(AgeGroup::Preteen, "robot-cat", "Robot Cat", "17-robot-cat"),
    entry(AgeGroup::Preteen, "satellite", "Space Satellite", "18-satellite"),
    entry(AgeGroup::Preteen, "helmet-stickers", "Helmet with Stickers", "19-helmet-stickers"),
    entry(AgeGroup::Preteen, "robot-cat-new", "Robot Cat Character", "20-robot-cat"),
    entry(AgeGroup::Preteen, "camper-van", "Mountain Camper Van", "21-camper-van"),
    entry(AgeGroup::Preteen, "ringed-planet", "Space Planet with Ring", "22-ringed-planet"),
    // 13-15
    entry(AgeGroup::Teen, "dragon", "Fantasy Dragon", "01-dragon"),
    entry(AgeGroup::Teen, "reading-corner", "Reading Corner", "02-reading-corner"),
    entry(AgeGroup::Teen, "phoenix", "Phoenix Bird", "03-phoenix"),
    entry(AgeGroup::Teen, "study-desk", "Cozy Study Desk", "04-study-desk"),
    entry(AgeGroup::Teen, "steampunk-robot", "Steampunk Robot", "05-steampunk-robot"),
    entry(AgeGroup::Teen, "fox", "Friendly Fox", "06-fox"),
    entry(AgeGroup::Teen, "spaceship", "Sci-Fi Spaceship", "07-spaceship"),
    entry(AgeGroup::Teen, "knight-helmet", "Fantasy Knight Helmet", "08-knight-helmet"),
    entry(AgeGroup::Teen, "owl", "Wise Owl", "09-owl"),
    entry(AgeGroup::Teen, "camera", "Vintage Camera", "10-camera"),
    entry(AgeGroup::Teen, "sailboat", "Sailboat", "11-sailboat"),
    entry(AgeGroup::Teen, "dragon-crystal", "Dragon with Crystal", "17-dragon-crystal"),
    entry(AgeGroup::Teen, "handheld-console", "Handheld Game Console", "18-handheld-console"),
    entry(AgeGroup::Teen, "headphones", "Cozy Headphones", "19-headphones"),
    entry(AgeGroup::Teen, "owl-goggles", "Steampunk Owl with Goggles", "20-owl-goggles"),
    entry(AgeGroup::Teen, "hoverboard", "Sci-Fi Hoverboard", "21-hoverboard"),
    entry(AgeGroup::Teen, "cozy-desk", "Cozy Desk Setup", "22-cozy-desk"),
];

/// Templates offered to `group`, in display order.
pub fn templates_for(group: AgeGroup) -> Vec<Template> {
    CATALOG.iter().filter(|e| e.group == group).map(Entry::to_template).collect()
}
