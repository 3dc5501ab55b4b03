//! Shared button control

use std::fmt;

use leptos::prelude::*;

/// Visual style of a [`Button`].
///
/// Unknown names are kept verbatim in `Other` and emitted as `btn-{name}`
/// without any check that the stylesheet knows them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Other(String),
}

/// Size of a [`Button`]. Unknown names pass through like [`ButtonVariant`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
    Other(String),
}

impl ButtonVariant {
    pub fn as_str(&self) -> &str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Other(name) => name,
        }
    }
}

impl ButtonSize {
    pub fn as_str(&self) -> &str {
        match self {
            ButtonSize::Sm => "sm",
            ButtonSize::Md => "md",
            ButtonSize::Lg => "lg",
            ButtonSize::Other(name) => name,
        }
    }
}

impl From<&str> for ButtonVariant {
    fn from(name: &str) -> Self {
        match name {
            "primary" => ButtonVariant::Primary,
            "secondary" => ButtonVariant::Secondary,
            "outline" => ButtonVariant::Outline,
            other => ButtonVariant::Other(other.to_string()),
        }
    }
}

impl From<&str> for ButtonSize {
    fn from(name: &str) -> Self {
        match name {
            "sm" => ButtonSize::Sm,
            "md" => ButtonSize::Md,
            "lg" => ButtonSize::Lg,
            other => ButtonSize::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compose the class list: `btn-base btn-{variant} btn-{size} {extra}`.
pub fn button_classes(variant: &ButtonVariant, size: &ButtonSize, extra: &str) -> String {
    format!("btn-base btn-{} btn-{} {}", variant, size, extra)
        .trim()
        .to_string()
}

/// Stateless button.
///
/// `action` names a client-side handler; the page script calls it once per
/// click. Without an action the button is purely presentational.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button variant="outline" size="lg" action="menu-toggle">"Menu"</Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Visual variant, `primary` when omitted
    #[prop(optional, into)]
    variant: ButtonVariant,
    /// Size, `md` when omitted
    #[prop(optional, into)]
    size: ButtonSize,
    /// Client action dispatched on click (`data-action`)
    #[prop(optional, into)]
    action: Option<String>,
    /// Extra class names appended after the generated ones
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let classes = button_classes(&variant, &size, &class);
    view! {
        <button class=classes data-action=action>
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_primary_medium() {
        assert_eq!(
            button_classes(&ButtonVariant::default(), &ButtonSize::default(), ""),
            "btn-base btn-primary btn-md"
        );
    }

    #[test]
    fn outline_large_has_no_default_markers() {
        let classes = button_classes(&"outline".into(), &"lg".into(), "");
        assert_eq!(classes, "btn-base btn-outline btn-lg");
        assert!(!classes.contains("btn-primary"));
        assert!(!classes.contains("btn-md"));
    }

    #[test]
    fn unknown_names_pass_through() {
        let variant = ButtonVariant::from("ghost");
        let size = ButtonSize::from("xl");
        assert_eq!(variant, ButtonVariant::Other("ghost".into()));
        assert_eq!(
            button_classes(&variant, &size, "wide"),
            "btn-base btn-ghost btn-xl wide"
        );
    }

    #[test]
    fn renders_button_with_action() {
        let html = view! {
            <Button variant="outline" size="lg" action="menu-toggle" class="cta-button">
                "Request Quote"
            </Button>
        }
        .to_html();

        assert!(html.contains(r#"class="btn-base btn-outline btn-lg cta-button""#));
        assert!(html.contains(r#"data-action="menu-toggle""#));
        assert!(html.contains("Request Quote"));
    }

    #[test]
    fn renders_without_action_attribute() {
        let html = view! { <Button>"Get Started"</Button> }.to_html();

        assert!(html.contains(r#"class="btn-base btn-primary btn-md""#));
        assert!(!html.contains("data-action"));
    }
}
