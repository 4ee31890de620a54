use crate::base;

const TOTAL_LABEL: &str = "Total";

pub struct Barchart<'a> {
    charset: &'a base::Charset,
    palette: &'a base::Palette,
    series: &'a base::Series,
    label_charlen: usize,
    max_abs_val: base::Amount,
    max_barlen: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub palette: base::Palette,
    pub term_width: usize,
    pub series: base::Series,
}

impl Config {
    pub fn to_barchart(&self) -> Barchart<'_> {
        let entries = self.series.entries();
        let label_charlen = entries
            .iter()
            .map(|e| base::util::charlen(&e.name))
            .chain(std::iter::once(TOTAL_LABEL.len()))
            .max()
            .unwrap_or_default();
        let max_abs_val = entries
            .iter()
            .map(|e| e.value.abs())
            .max()
            .unwrap_or_default();
        let max_val_charlen = entries
            .iter()
            .map(|e| e.value.charlen())
            .max()
            .unwrap_or_default();
        let max_barlen = self
            .term_width
            .max(base::util::MIN_TERM_WIDTH)
            .saturating_sub(label_charlen)
            .saturating_sub(base::util::BOUNDING_SPACES_COUNT)
            .saturating_sub(1) // vertical divider just before bar
            .saturating_sub(max_val_charlen)
            .max(base::util::MIN_BARLEN);

        Barchart {
            charset: &self.charset,
            palette: &self.palette,
            series: &self.series,
            label_charlen,
            max_abs_val,
            max_barlen,
        }
    }
}

impl Barchart<'_> {
    fn barlen(&self, val: base::Amount) -> usize {
        if self.max_abs_val == base::Amount::ZERO {
            return 0;
        }
        let x = (val.abs().0 as f64) / (self.max_abs_val.0 as f64) * (self.max_barlen as f64);
        self.max_barlen.min(x.round() as usize)
    }

    fn draw(
        &self,
        w: &mut impl std::fmt::Write,
        entry: &base::Entry,
        color: base::Color,
    ) -> std::fmt::Result {
        write!(
            w,
            "{:<width$} {}",
            entry.name,
            self.charset.chart_axis,
            width = self.label_charlen
        )?;
        let barlen = self.barlen(entry.value);
        if barlen > 0 {
            let bar = match entry.value.0 < 0 {
                true => self.charset.chart_bar_neg,
                false => self.charset.chart_bar_pos,
            };
            let mut bars = bar.to_string().repeat(barlen);
            if self.charset.color {
                bars = colored::Colorize::truecolor(bars.as_str(), color.r, color.g, color.b)
                    .to_string();
            }
            w.write_str(&bars)?;
            w.write_char(' ')?;
        }
        writeln!(w, "{}", entry.value)
    }
}

impl std::fmt::Display for Barchart<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.series.is_empty() {
            return Ok(());
        }
        for (entry, color) in self.series.colored(self.palette) {
            self.draw(f, entry, color)?;
        }
        writeln!(
            f,
            "{:<width$}  {}",
            TOTAL_LABEL,
            self.series.total(),
            width = self.label_charlen
        )
    }
}
