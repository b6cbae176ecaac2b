use obible_core::Verse;
use std::fmt;

/// Numbered verses, one per line
pub struct VerseList<'a> {
    pub verses: &'a [Verse],
}

impl fmt::Display for VerseList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .verses
            .iter()
            .map(|verse| verse.v.to_string().len())
            .max()
            .unwrap_or(1);

        for verse in self.verses {
            writeln!(f, "{:>width$}  {}", verse.v, verse.t, width = width)?;
        }
        Ok(())
    }
}
