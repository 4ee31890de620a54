/// If `fullmatch` is false, ensures all patterns start with and end with `*`,
/// except for empty patterns which are left alone. If `fullmatch` is true,
/// does not modify patterns.
pub fn preprocess_patterns(patterns: &[String], fullmatch: bool) -> std::borrow::Cow<'_, [String]> {
    if fullmatch {
        return patterns.into();
    }
    patterns
        .iter()
        .map(|s| {
            let mut s2 = s.clone();
            if s2.is_empty() {
                return s2;
            }
            if !s2.starts_with('*') {
                s2.insert(0, '*');
            }
            if !s2.ends_with('*') {
                s2.push('*');
            }
            s2
        })
        .collect::<Vec<_>>()
        .into()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(&[], /*fullmatch=*/true, &[])]
    #[case(&[], /*fullmatch=*/false, &[])]
    #[case(
        &["1".into(), "".into(), "2*".into(), "**3*3".into()],
        /*fullmatch=*/true,
        &["1", "", "2*", "**3*3"]
    )]
    #[case(
        &["1".into(), "".into(), "2*".into(), "**3*3".into()],
        /*fullmatch=*/false,
        &["*1*", "", "*2*", "**3*3*"]
    )]
    fn test_preprocess_patterns(
        #[case] patterns: &[String],
        #[case] fullmatch: bool,
        #[case] want: &[&str],
    ) {
        let got = preprocess_patterns(patterns, fullmatch);
        assert_eq!(got, want);
    }
}
