use coloring_canvas::components::app::App;
use coloring_canvas::util;

fn main() {
    util::init_logging();
    log::info!("coloring canvas starting");
    yew::Renderer::<App>::new().render();
}
