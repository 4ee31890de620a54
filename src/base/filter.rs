use crate::base;

/// Decides which records take part in aggregation. A record is kept if:
/// - Its date is in `interval`
/// - For every field given patterns, its value matches any of them (a missing
///   value is matched as the empty string)
/// - It passes the selection of every dimension
pub struct Filter<'a> {
    interval: base::Interval,
    patterns: Vec<(base::Field, Vec<wildmatch::WildMatch>)>,
    selections: &'a base::Selections,
    missing_names: Option<&'a base::MissingNames>,
}

impl<'a> Filter<'a> {
    pub fn new(interval: base::Interval, selections: &'a base::Selections) -> Self {
        Self {
            interval,
            patterns: Vec::new(),
            selections,
            missing_names: None,
        }
    }

    /// Additionally requires `field` to match any of `patterns`.
    pub fn with_patterns<T>(mut self, field: base::Field, patterns: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        let patterns = patterns
            .iter()
            .map(|s| wildmatch::WildMatch::new(s.as_ref()))
            .collect();
        self.patterns.push((field, patterns));
        self
    }

    /// Matches selections against `names` for records missing a name.
    pub fn with_missing_names(mut self, names: &'a base::MissingNames) -> Self {
        self.missing_names = Some(names);
        self
    }

    pub fn keeps(&self, r: &base::Record) -> bool {
        self.interval.contains(r.date())
            && self.patterns.iter().all(|(field, patterns)| {
                let value = field.of(r).unwrap_or_default();
                patterns.iter().any(|p| p.matches(value))
            })
            && self
                .selections
                .is_visible(r, self.missing_names.unwrap_or(&base::MissingNames::NONE))
    }

    /// Returns a new record list holding the kept records.
    pub fn apply(&self, rl: &base::Recordlist) -> base::Recordlist {
        let kept = rl.iter().filter(|r| self.keeps(r)).collect::<base::Recordlist>();
        tracing::debug!(
            interval = %self.interval,
            kept = kept.len(),
            dropped = rl.len() - kept.len(),
            "filtered records"
        );
        kept
    }
}

#[cfg(test)]
mod tests {
    use rstest::fixture;
    use rstest::rstest;

    use super::*;

    #[fixture]
    fn rl() -> base::Recordlist {
        r#"
            {"date":"2015-03-01","client":"X","product":"a","branch":"FCIA BIOSALUD","amount":100}
            {"date":"2015-03-30","client":"Y","product":"b","branch":"BIOSALUD CHACRAS PARK","amount":50}
            {"date":"2015-04-15","client":"X","product":"b","branch":"FCIA BIOSALUD","amount":-20}
            {"date":"2015-05-02","client":"Z","amount":10}
        "#
        .parse()
        .unwrap()
    }

    fn selections(f: impl FnOnce(&mut base::Selections)) -> base::Selections {
        let mut sels = base::Selections::default();
        f(&mut sels);
        sels
    }

    #[rstest]
    #[case(base::Interval::MAX, &["*"], base::Selections::default(), &[100, 50, -20, 10])]
    #[case("2015-05-01:2015-04-01", &["*"], base::Selections::default(), &[])]
    #[case(base::Interval::MAX, &[], base::Selections::default(), &[])]
    #[case("2015-03", &["*"], base::Selections::default(), &[100, 50])]
    #[case(base::Interval::MAX, &["*CHACRAS*"], base::Selections::default(), &[50])]
    #[case(base::Interval::MAX, &["FCIA*", ""], base::Selections::default(), &[100, -20, 10])]
    #[case(
        base::Interval::MAX,
        &["*"],
        selections(|s| { s.get_mut(base::Dimension::Client).toggle_exclusion("Y"); }),
        &[100, -20, 10]
    )]
    #[case(
        base::Interval::MAX,
        &["*"],
        selections(|s| { s.get_mut(base::Dimension::Client).toggle_inclusion("Z"); }),
        &[10]
    )]
    #[case(
        base::Interval::MAX,
        &["*"],
        selections(|s| {
            s.get_mut(base::Dimension::Client).toggle_inclusion("X");
            s.get_mut(base::Dimension::Product).toggle_exclusion("b");
        }),
        &[100]
    )]
    fn test_apply(
        rl: base::Recordlist,
        #[case] interval: base::Interval,
        #[case] branches: &[&str],
        #[case] sels: base::Selections,
        #[case] want: &[i64],
    ) {
        let got = Filter::new(interval, &sels)
            .with_patterns(base::Field::Branch, branches)
            .apply(&rl)
            .iter()
            .map(|r| r.amount().0 / 100)
            .collect::<Vec<_>>();
        assert_eq!(got, want);
    }

    #[test]
    fn test_keeps_only_visible() {
        let rl = r#"
            {"date":"2015-03-01","client":"X","amount":100}
            {"date":"2015-03-01","client":"Y","amount":50}
        "#
        .parse::<base::Recordlist>()
        .unwrap();
        let sels = selections(|s| {
            s.get_mut(base::Dimension::Client).toggle_exclusion("Y");
        });
        let filter = Filter::new(base::Interval::MAX, &sels);
        let kept = rl.iter().map(|r| filter.keeps(r)).collect::<Vec<_>>();
        assert_eq!(kept, vec![true, false]);
    }

    #[rstest]
    #[case(base::Field::Seller, &["*"], &[100, 50, 10])]
    #[case(base::Field::Seller, &["Gomez"], &[100, 10])]
    #[case(base::Field::Seller, &["gomez"], &[])]
    #[case(base::Field::Seller, &["", "Perez"], &[50])]
    #[case(base::Field::Type, &["NC*"], &[50])]
    #[case(base::Field::PaymentMethod, &["*Visa*", "Efectivo"], &[100, 10])]
    fn test_field_patterns(
        #[case] field: base::Field,
        #[case] patterns: &[&str],
        #[case] want: &[i64],
    ) {
        let rl = r#"
            {"date":"2015-03-01","sellerName":"Gomez","type":"FA","paymentMethod":"Tarjeta Visa","amount":100}
            {"date":"2015-03-02","sellerName":"Perez","type":"NC A","amount":50}
            {"date":"2015-03-03","sellerName":"Gomez","type":"FA","paymentMethod":"Efectivo","amount":10}
        "#
        .parse::<base::Recordlist>()
        .unwrap();
        let sels = base::Selections::default();
        let got = Filter::new(base::Interval::MAX, &sels)
            .with_patterns(field, patterns)
            .apply(&rl)
            .iter()
            .map(|r| r.amount().0 / 100)
            .collect::<Vec<_>>();
        assert_eq!(got, want);
    }

    #[test]
    fn test_missing_names() {
        let rl = r#"
            {"date":"2015-03-01","entity":"PAMI","amount":100}
            {"date":"2015-03-02","amount":50}
        "#
        .parse::<base::Recordlist>()
        .unwrap();
        let sels = selections(|s| {
            s.get_mut(base::Dimension::Entity).toggle_inclusion("Particular");
        });
        let filter = Filter::new(base::Interval::MAX, &sels);
        assert!(filter.apply(&rl).is_empty());

        let names = base::MissingNames::default();
        let got = filter
            .with_missing_names(&names)
            .apply(&rl)
            .iter()
            .map(|r| r.amount().0 / 100)
            .collect::<Vec<_>>();
        assert_eq!(got, vec![50]);
    }
}
