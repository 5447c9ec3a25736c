use crate::app::App;

mod app;
mod components;
mod wizard;

fn main() {
    yew::Renderer::<App>::new().render();
}
