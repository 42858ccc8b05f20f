use leptos::prelude::*;

/// Input component with label and error message support
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Blur event handler, used to mark the field as touched
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    /// Validation message shown under the input
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Input type: "text" (default), "email", "number", "date", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// `min` attribute for number/date inputs
    #[prop(optional, into)]
    min: MaybeProp<String>,
    /// `max` attribute for number/date inputs
    #[prop(optional, into)]
    max: MaybeProp<String>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let has_error = move || error.get().is_some();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class="form__input"
                class:form__input--error=has_error
                type=input_t
                prop:value=move || value.get()
                min=move || min.get()
                max=move || max.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
                on:blur=move |_| {
                    if let Some(handler) = on_blur {
                        handler.run(());
                    }
                }
            />
            {move || error.get().map(|e| view! { <p class="form__error">{e}</p> })}
        </div>
    }
}
