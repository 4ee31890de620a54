#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    pub chart_axis: char,
    pub chart_bar_pos: char,
    pub chart_bar_neg: char,
    pub pick_included: &'static str,
    pub pick_excluded: &'static str,
    pub pick_inactive: &'static str,
    pub color: bool,
}

impl Default for Charset {
    /// Only ASCII characters. No color.
    fn default() -> Self {
        Self {
            chart_axis: '|',
            chart_bar_pos: '+',
            chart_bar_neg: '-',
            pick_included: "[+]",
            pick_excluded: "[x]",
            pick_inactive: "[ ]",
            color: false,
        }
    }
}

impl Charset {
    pub fn with_unicode(self) -> Self {
        Self {
            chart_axis: '\u{2502}',
            chart_bar_pos: '\u{2588}',
            chart_bar_neg: '\u{2591}',
            pick_included: "\u{2714}",
            pick_excluded: "\u{2718}",
            pick_inactive: "\u{25cb}",
            ..self
        }
    }

    pub fn with_color(self) -> Self {
        Self {
            color: true,
            ..self
        }
    }
}
