//! `module show`

use crate::parser::{Output, OutputParser};
use asterisk_domain::defaults;
use asterisk_domain::{ErrorSink, Family, ModulesInfo};

impl<S: ErrorSink> OutputParser<S> {
    /// The last line reads `6 modules loaded`
    pub fn modules(&self, output: Output<'_>) -> ModulesInfo {
        match output {
            Ok(out) => ModulesInfo {
                module_count: self.summary_count(Family::Modules, out),
            },
            Err(_) => defaults::MODULES,
        }
    }
}
