use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::WIZARD_RESET_DELAY_MS;
use crate::dom;
use crate::motion::wizard::{
    Field, Phase, Step, Wizard, WizardAction, BUDGET_CHOICES, PURPOSE_CHOICES, SERVICE_CHOICES,
};

#[derive(Properties, PartialEq)]
pub struct ContactWizardProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

fn log_submission(form: &crate::motion::wizard::ContactForm) {
    match serde_json::to_string(form) {
        Ok(json) => gloo_console::log!("Contact form submitted:", json),
        Err(err) => log::warn!("could not serialize contact form: {}", err),
    }
}

fn text_field(
    wizard: &UseReducerHandle<Wizard>,
    field: Field,
    label: &'static str,
    kind: &'static str,
    required: bool,
) -> Html {
    let dispatcher = wizard.dispatcher();
    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        dispatcher.dispatch(WizardAction::Edit(field, input.value()));
    });
    html! {
        <label class="form-field">
            <span>{label}</span>
            <input
                type={kind}
                value={wizard.form().field(field).to_string()}
                {required}
                {oninput}
            />
        </label>
    }
}

#[function_component(ContactWizard)]
pub fn contact_wizard(props: &ContactWizardProps) -> Html {
    let wizard = use_reducer(Wizard::default);
    let reset_timer = use_mut_ref(|| None::<Timeout>);

    // Closing always throws away the half-finished form.
    let close = {
        let dispatcher = wizard.dispatcher();
        let on_close = props.on_close.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |_: ()| {
            reset_timer.borrow_mut().take();
            dispatcher.dispatch(WizardAction::Reset);
            on_close.emit(());
        })
    };

    {
        let close = close.clone();
        let open = props.open;
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if open && e.key() == "Escape" {
                close.emit(());
            }
        });
    }

    let on_next = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| match wizard.validate_step() {
            Ok(()) => wizard.dispatch(WizardAction::Advance),
            Err(err) => {
                if let Err(dom_err) = dom::alert(&err.to_string()) {
                    log::warn!("{} ({})", err, dom_err);
                }
            }
        })
    };
    let on_back = {
        let dispatcher = wizard.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(WizardAction::Retreat))
    };
    let on_submit = {
        let wizard = wizard.clone();
        let close = close.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // Enter on an earlier step submits implicitly.
            if wizard.phase() == Phase::Submitted || !wizard.show_submit() {
                return;
            }
            log_submission(wizard.form());
            log::info!("contact form submitted at step {}", wizard.step().number());
            wizard.dispatch(WizardAction::Submit);
            let close = close.clone();
            *reset_timer.borrow_mut() = Some(Timeout::new(WIZARD_RESET_DELAY_MS, move || close.emit(())));
        })
    };
    let on_close_click = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };
    let on_backdrop = {
        let close = close.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                close.emit(());
            }
        })
    };

    let form = wizard.form();
    let step = wizard.step();
    let step_class = |which: Step| classes!("form-step", (step == which).then_some("active"));

    let purposes = PURPOSE_CHOICES.iter().map(|&(value, label)| {
        let dispatcher = wizard.dispatcher();
        let onchange = Callback::from(move |_: Event| {
            dispatcher.dispatch(WizardAction::SelectPurpose(value.to_string()));
        });
        html! {
            <label class="choice">
                <input
                    type="radio"
                    name="purpose"
                    {value}
                    checked={form.purpose.as_deref() == Some(value)}
                    {onchange}
                />
                <span>{label}</span>
            </label>
        }
    });

    let services = SERVICE_CHOICES.iter().map(|&(value, label)| {
        let dispatcher = wizard.dispatcher();
        let onchange = Callback::from(move |_: Event| {
            dispatcher.dispatch(WizardAction::ToggleService(value.to_string()));
        });
        html! {
            <label class="choice">
                <input type="checkbox" name="services" {value} checked={form.has_service(value)} {onchange} />
                <span>{label}</span>
            </label>
        }
    });

    let on_budget = {
        let dispatcher = wizard.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            dispatcher.dispatch(WizardAction::Edit(Field::Budget, select.value()));
        })
    };
    let on_message = {
        let dispatcher = wizard.dispatcher();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            dispatcher.dispatch(WizardAction::Edit(Field::Message, area.value()));
        })
    };

    let hidden = |show: bool| (!show).then_some("is-hidden");
    let submitted = wizard.phase() == Phase::Submitted;

    html! {
        <div class={classes!("modal", props.open.then_some("active"))} onclick={on_backdrop} aria-hidden={(!props.open).to_string()}>
            <style>{WIZARD_CSS}</style>
            <div class="modal-dialog" role="dialog" aria-modal="true" aria-labelledby="contact-title">
                <button class="modal-close" aria-label="Close" onclick={on_close_click}>{"×"}</button>
                <header class="modal-header">
                    <h2 id="contact-title">{"Let's build something"}</h2>
                    <span class="step-label">{format!("Step {} of {}", step.number(), Step::COUNT)}</span>
                    <div class="progress-track">
                        <div class="progress-fill" style={format!("width: {:.2}%", wizard.progress_percent())}></div>
                    </div>
                </header>
                <form class="contact-form" onsubmit={on_submit}>
                    <fieldset class={step_class(Step::Purpose)}>
                        <legend>{"What can we help you with?"}</legend>
                        <div class="choices">{ for purposes }</div>
                    </fieldset>
                    <fieldset class={step_class(Step::Scope)}>
                        <legend>{"Which services do you need?"}</legend>
                        <div class="choices">{ for services }</div>
                        <label class="form-field">
                            <span>{"Budget"}</span>
                            <select onchange={on_budget}>
                                <option value="" selected={form.budget.is_empty()}>{"Not sure yet"}</option>
                                { for BUDGET_CHOICES.iter().map(|&budget| html! {
                                    <option value={budget} selected={form.budget == budget}>{budget}</option>
                                }) }
                            </select>
                        </label>
                    </fieldset>
                    <fieldset class={step_class(Step::Contact)}>
                        <legend>{"How do we reach you?"}</legend>
                        { text_field(&wizard, Field::Name, "Name", "text", true) }
                        { text_field(&wizard, Field::Email, "Email", "email", true) }
                        { text_field(&wizard, Field::Company, "Company", "text", false) }
                        <label class="form-field">
                            <span>{"Tell us more"}</span>
                            <textarea rows="4" value={form.message.clone()} oninput={on_message} />
                        </label>
                    </fieldset>
                    <div class="form-actions">
                        <button type="button" class={classes!("btn", "btn-ghost", hidden(wizard.show_back()))} onclick={on_back}>
                            {"Back"}
                        </button>
                        <button type="button" class={classes!("btn", hidden(wizard.show_next()))} onclick={on_next}>
                            {"Next"}
                        </button>
                        <button type="submit" class={classes!("btn", hidden(wizard.show_submit()))} disabled={submitted}>
                            {"Send"}
                        </button>
                    </div>
                </form>
                <div class={classes!("form-success", submitted.then_some("visible"))} role="status">
                    <strong>{"Thanks!"}</strong>
                    <p>{"Your message is on its way. We'll get back to you within two working days."}</p>
                </div>
            </div>
        </div>
    }
}

const WIZARD_CSS: &str = r#"
    .modal {
        position: fixed;
        inset: 0;
        z-index: 200;
        background: rgba(10, 10, 12, 0.6);
        backdrop-filter: blur(6px);
        display: flex;
        align-items: center;
        justify-content: center;
        opacity: 0;
        visibility: hidden;
        transition: opacity 0.3s ease, visibility 0.3s ease;
    }
    .modal.active { opacity: 1; visibility: visible; }
    .modal-dialog {
        position: relative;
        width: min(620px, calc(100vw - 2rem));
        max-height: calc(100vh - 2rem);
        overflow-y: auto;
        background: #fff;
        border-radius: 20px;
        padding: 2.5rem;
        box-sizing: border-box;
        transform: translateY(20px);
        transition: transform 0.3s ease;
    }
    .modal.active .modal-dialog { transform: translateY(0); }
    .modal-close {
        position: absolute;
        top: 1rem;
        right: 1rem;
        border: none;
        background: none;
        font-size: 1.8rem;
        cursor: pointer;
    }
    .modal-header h2 { margin: 0 0 0.5rem; }
    .step-label { font-size: 0.85rem; color: var(--muted); }
    .progress-track {
        height: 4px;
        border-radius: 2px;
        background: var(--line);
        margin: 1rem 0 2rem;
        overflow: hidden;
    }
    .progress-fill {
        height: 100%;
        background: var(--accent);
        transition: width 0.4s ease;
    }
    .form-step { display: none; border: none; margin: 0; padding: 0; }
    .form-step.active { display: block; }
    .form-step legend { font-size: 1.2rem; font-weight: 600; margin-bottom: 1rem; }
    .choices { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 0.75rem; }
    .choice {
        display: flex;
        align-items: center;
        gap: 0.6rem;
        padding: 0.9rem 1rem;
        border: 1px solid var(--line);
        border-radius: 12px;
        cursor: pointer;
    }
    .choice:has(input:checked) { border-color: var(--accent); }
    .form-field { display: flex; flex-direction: column; gap: 0.35rem; margin-top: 1rem; }
    .form-field input, .form-field select, .form-field textarea {
        font: inherit;
        padding: 0.75rem 0.9rem;
        border: 1px solid var(--line);
        border-radius: 10px;
    }
    .form-actions { display: flex; justify-content: flex-end; gap: 0.75rem; margin-top: 2rem; }
    .btn.is-hidden { display: none; }
    .form-success {
        display: none;
        margin-top: 1.5rem;
        padding: 1rem 1.25rem;
        border-radius: 12px;
        background: #eaf7ef;
        color: #1d5c36;
    }
    .form-success.visible { display: block; animation: fadeIn 0.4s ease; }
"#;
