fn main() {
    dashboard::logs::init_logging();
    yew::Renderer::<dashboard::App>::new().render();
}
