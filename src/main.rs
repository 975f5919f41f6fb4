use flags_web::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    flags_web::logging::init();
    mount_to_body(App);
}
