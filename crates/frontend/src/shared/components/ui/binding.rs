use leptos::prelude::*;

/// Value signal and input callback for one text field of a form DTO
pub fn bind<D>(
    form: RwSignal<D>,
    get: fn(&D) -> String,
    set: fn(&mut D, String),
) -> (Signal<String>, Callback<String>)
where
    D: Send + Sync + 'static,
{
    let value = Signal::derive(move || form.with(get));
    let on_input = Callback::new(move |v: String| form.update(|f| set(f, v)));
    (value, on_input)
}

/// Lenient numeric parse for form inputs; blank or partial input reads as zero
pub fn parse_or_zero<N: std::str::FromStr + Default>(raw: &str) -> N {
    raw.trim().parse().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_numbers_read_as_zero() {
        assert_eq!(parse_or_zero::<i32>(" 42 "), 42);
        assert_eq!(parse_or_zero::<i32>(""), 0);
        assert_eq!(parse_or_zero::<f64>("1.5"), 1.5);
        assert_eq!(parse_or_zero::<f64>("-"), 0.0);
    }
}
