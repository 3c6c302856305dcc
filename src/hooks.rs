use crate::dom::{DomView, SubmitSlot};
use kitchen_timer::config::{APPLICATION_NAME, SECONDS_WIDTH, TICK_INTERVAL_MS};
use kitchen_timer::utils::zero_pad;
use kitchen_timer::{enable_form_submit, IntervalDriver, ViewModel};
use log::info;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Everything the page needs to render a kitchen timer.
#[derive(Clone)]
pub struct KitchenTimer {
    /// Minutes display text, never padded.
    pub minutes: AttrValue,
    /// Seconds display text, zero padded.
    pub seconds: AttrValue,
    pub number_input: NodeRef,
    pub timer_sound: NodeRef,
    /// Form `onsubmit`: suppresses navigation and runs the installed handler.
    pub on_submit: Callback<SubmitEvent>,
}

/// Build the view-model once, after the first render has bound the node
/// refs, and keep it alive for the lifetime of the component.
#[hook]
pub fn use_kitchen_timer() -> KitchenTimer {
    let seconds = use_state(|| zero_pad(0, SECONDS_WIDTH));
    let minutes = use_state(|| "0".to_string());
    let number_input = use_node_ref();
    let timer_sound = use_node_ref();
    let submit_slot: SubmitSlot = use_mut_ref(|| None);
    let view_model = use_mut_ref(|| None::<Rc<RefCell<ViewModel<DomView>>>>);

    {
        let seconds = seconds.clone();
        let minutes = minutes.clone();
        let number_input = number_input.clone();
        let timer_sound = timer_sound.clone();
        let submit_slot = submit_slot.clone();

        use_effect_with((), move |_| {
            let view = DomView::new(seconds, minutes, number_input, timer_sound, submit_slot);
            let vm = Rc::new(RefCell::new(ViewModel::new(view)));
            enable_form_submit(&vm, IntervalDriver::new(TICK_INTERVAL_MS));
            *view_model.borrow_mut() = Some(vm);
            info!("{} ready", APPLICATION_NAME);
            || ()
        });
    }

    let on_submit = {
        let submit_slot = submit_slot.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(handler) = submit_slot.borrow_mut().as_mut() {
                handler();
            }
        })
    };

    KitchenTimer {
        minutes: AttrValue::from((*minutes).clone()),
        seconds: AttrValue::from((*seconds).clone()),
        number_input,
        timer_sound,
        on_submit,
    }
}
