use leptos::prelude::*;

/// Colour of the card border, mapped onto `stat-card--*` modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTone {
    Success,
    Warning,
    Error,
    Neutral,
}

impl StatTone {
    fn class(self) -> &'static str {
        match self {
            StatTone::Success => "stat-card stat-card--success",
            StatTone::Warning => "stat-card stat-card--warning",
            StatTone::Error => "stat-card stat-card--error",
            StatTone::Neutral => "stat-card",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Emoji or short marker shown in the icon slot
    #[prop(into, optional)]
    marker: String,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    tone: Option<StatTone>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let class = tone.unwrap_or(StatTone::Neutral).class();

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">{marker}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
