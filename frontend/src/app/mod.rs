//! Root application component, wired in the Elm style: `state` holds the
//! data, `messages` the events, `update` the transitions, and `view` the
//! rendering. The component implementation below only delegates.

use yew::prelude::*;

pub mod helpers;
pub mod messages;
pub mod state;
mod update;
mod view;

pub use messages::{Msg, WizardMsg};
pub use state::{App, Screen, SubmissionStatus};

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        App::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
