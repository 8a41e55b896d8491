use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::driver::ScopeDriver;
use crate::animation::scope::AnimationRegistration;
use crate::animation::transition::{PageTransitionMachine, TransitionDecision, TransitionPhase};
use crate::config::AnimationConfig;

const PAGE_KEY: &str = "page";

#[derive(Properties, PartialEq)]
pub struct PageTransitionProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PageTransition)]
pub fn page_transition(props: &PageTransitionProps) -> Html {
    let config = use_context::<AnimationConfig>().unwrap_or_default();
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());
    let machine = use_mut_ref(PageTransitionMachine::new);
    let driver = use_mut_ref(|| None::<ScopeDriver>);
    let container = use_node_ref();

    {
        let machine = machine.clone();
        let driver = driver.clone();
        let container = container.clone();
        use_effect_with_deps(
            move |path: &String| {
                let interrupted = machine.borrow().phase() == TransitionPhase::Transitioning;
                let decision = machine.borrow_mut().navigate(path);
                match decision {
                    TransitionDecision::ShowImmediately => {
                        debug!("first render at {}, no transition", path);
                    }
                    TransitionDecision::Unchanged => {}
                    TransitionDecision::PlayEnter => {
                        if interrupted {
                            debug!("navigated mid-transition, restarting enter animation");
                        }
                        if let Some(previous) = machine.borrow().route().previous.as_deref() {
                            debug!("page transition {} -> {}", previous, path);
                        }
                        if let Some(window) = web_sys::window() {
                            window.scroll_to_with_x_and_y(0.0, 0.0);
                        }
                        let previous = driver.borrow_mut().take();
                        if let Some(previous) = previous {
                            previous.teardown();
                        }
                        match container.cast::<Element>() {
                            Some(root) => {
                                let settle = {
                                    let machine = machine.clone();
                                    Callback::from(move |_| machine.borrow_mut().settle())
                                };
                                let tween = config.page_enter_tween();
                                let next = ScopeDriver::mount(root, &config, move |handle| {
                                    let registration =
                                        AnimationRegistration::new(PAGE_KEY, tween).on_complete(settle);
                                    if let Err(err) = handle.register(registration) {
                                        warn!("page transition not registered: {}", err);
                                    }
                                });
                                *driver.borrow_mut() = Some(next);
                            }
                            None => machine.borrow_mut().settle(),
                        }
                    }
                }
                || ()
            },
            path,
        );
    }

    {
        let driver = driver.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    let current = driver.borrow_mut().take();
                    if let Some(current) = current {
                        current.teardown();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div class="page-transition" ref={container} data-anim={PAGE_KEY}>
            { for props.children.iter() }
        </div>
    }
}
