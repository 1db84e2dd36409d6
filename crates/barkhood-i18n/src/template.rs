//! Placeholder substitution for parameterised strings.

/// Replace `{name}` placeholders in `template` with the matching values.
///
/// Unknown placeholders are left untouched so a missing argument is visible
/// in the rendered text instead of disappearing.
#[must_use]
pub fn format_template(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::format_template;

    #[test]
    fn substitutes_named_placeholders() {
        assert_eq!(
            format_template("with {dog} • {time}", &[("dog", "Luka"), ("time", "now")]),
            "with Luka • now"
        );
    }

    #[test]
    fn leaves_unknown_placeholders() {
        assert_eq!(format_template("hi {name}", &[]), "hi {name}");
    }
}
