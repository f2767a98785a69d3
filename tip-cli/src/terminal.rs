use std::io::Write;

use tip_core::{DisplayError, DisplaySink, ScreenDisplay, TaxAddition};

/// Prints each screen as a small text table.
///
/// ```text
/// Bill: 84.20    Group: 4
///   add   rate       tax     total
///  none    15%     12.63     24.21
///   low    20%     16.84     25.26
///  high    25%     21.05     26.31
/// ```
pub struct TerminalDisplay<W: Write> {
    out: W,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_screen(
        &mut self,
        screen: &ScreenDisplay,
    ) -> std::io::Result<()> {
        writeln!(self.out, "Bill: {}    Group: {}", screen.amount, screen.group_size)?;
        writeln!(self.out, "{:>5} {:>6} {:>9} {:>9}", "add", "rate", "tax", "total")?;
        for (addition, row) in TaxAddition::ALL.iter().zip(&screen.rows) {
            writeln!(
                self.out,
                "{:>5} {:>6} {:>9} {:>9}",
                addition.as_str(),
                row.rate,
                row.tax,
                row.total
            )?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write> DisplaySink for TerminalDisplay<W> {
    fn show(
        &mut self,
        screen: &ScreenDisplay,
    ) -> Result<(), DisplayError> {
        self.write_screen(screen)
            .map_err(|e| DisplayError::Write(e.to_string()))
    }
}
