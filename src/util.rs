// Browser helpers shared by the components.

pub fn init_logging() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already set: {e}").into());
    }
}

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

fn local_storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(store) => store,
        Err(e) => {
            log::warn!("localStorage unavailable: {e:?}");
            None
        }
    }
}

pub fn load_str(key: &str) -> Option<String> {
    let store = local_storage()?;
    match store.get_item(key) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("failed to read setting {key}: {e:?}");
            None
        }
    }
}

pub fn store_str(key: &str, value: &str) {
    if let Some(store) = local_storage() {
        if store.set_item(key, value).is_err() {
            log::warn!("failed to save setting {key}");
        }
    }
}

/// Read a `"true"`/`"false"` flag from `localStorage`; anything else is false.
pub fn load_flag(key: &str) -> bool {
    load_str(key).is_some_and(|v| v == "true")
}

pub fn store_flag(key: &str, value: bool) {
    store_str(key, if value { "true" } else { "false" });
}
