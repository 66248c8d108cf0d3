//! `confbridge show ...` replies
//!
//! Each reply is a banner followed by one name per line:
//!
//! ```text
//! --------- Menus -----------
//! sample_admin_menu
//! default_menu
//! ```

use crate::error::ParseError;
use crate::extract::sanitize;
use crate::parser::{Output, OutputParser};
use asterisk_domain::defaults;
use asterisk_domain::{ConfBridgeList, ErrorSink, Family};

impl<S: ErrorSink> OutputParser<S> {
    /// `confbridge show menus`
    pub fn conf_bridge_menus(&self, output: Output<'_>) -> ConfBridgeList {
        self.banner_list(Family::ConfBridgeMenus, output)
    }

    /// `confbridge show profile bridges`
    pub fn conf_bridge_profiles(&self, output: Output<'_>) -> ConfBridgeList {
        self.banner_list(Family::ConfBridgeProfiles, output)
    }

    /// `confbridge show profile users`
    pub fn conf_bridge_users(&self, output: Output<'_>) -> ConfBridgeList {
        self.banner_list(Family::ConfBridgeUsers, output)
    }

    fn banner_list(&self, family: Family, output: Output<'_>) -> ConfBridgeList {
        let Ok(out) = output else {
            return defaults::CONF_BRIDGE_LIST;
        };

        let text = sanitize(out);
        if text.is_empty() {
            self.mismatch(family, &ParseError::EmptyOutput(family.as_str()), out);
            return defaults::CONF_BRIDGE_LIST;
        }

        ConfBridgeList {
            entries: text.split('\n').skip(1).map(str::to_string).collect(),
        }
    }
}
