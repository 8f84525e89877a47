use leptos::prelude::*;

fn variant_class(variant: &str) -> &'static str {
    match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    }
}

/// Status pill. `variant` is one of primary, success, warning, error, neutral.
#[component]
pub fn Badge(variant: &'static str, children: Children) -> impl IntoView {
    view! {
        <span class=format!("badge {}", variant_class(variant))>
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_variants_are_neutral() {
        assert_eq!(variant_class("success"), "badge--success");
        assert_eq!(variant_class("loud"), "badge--neutral");
    }
}
