//! `sip show ...` replies and the user table

use crate::error::ParseError;
use crate::extract::{count_lines, parse_int, UNAVAILABLE};
use crate::parser::{Output, OutputParser};
use crate::tokens::find_numbers;
use asterisk_domain::defaults;
use asterisk_domain::{ActiveCount, ErrorSink, Family, PeersInfo, UsersInfo};

/// Line that carries the peer totals, e.g.
/// `5 sip peers [Monitored: 2 online, 3 offline Unmonitored: 4 online, 5 offline]`
fn is_summary_line(line: &str) -> bool {
    line.contains("sip peers") && line.contains("Monitored:") && line.contains("Unmonitored:")
}

impl<S: ErrorSink> OutputParser<S> {
    /// `sip show peers`
    ///
    /// The five monitoring totals come from the summary line. The status
    /// counters are computed over every line: one containing `UNKNOWN` counts
    /// as unknown, otherwise one containing `OK` counts as qualified. The
    /// counters are filled even when the summary is missing.
    pub fn peers(&self, output: Output<'_>) -> PeersInfo {
        let Ok(out) = output else {
            return defaults::PEERS;
        };

        let mut info = defaults::PEERS;
        match out.split('\n').find(|line| is_summary_line(line)) {
            Some(summary) => self.read_peer_totals(&mut info, summary),
            None if out.trim().is_empty() => {
                self.mismatch(Family::Peers, &ParseError::EmptyOutput("peers"), out);
            }
            None => {
                let err = ParseError::MissingAnchor {
                    family: Family::Peers.as_str(),
                    anchor: "sip peers [Monitored: ... Unmonitored: ...]",
                };
                self.mismatch(Family::Peers, &err, out);
            }
        }

        info.peers_status_unknown = 0;
        info.peers_status_qualified = 0;
        for line in out.split('\n') {
            if line.contains("UNKNOWN") {
                info.peers_status_unknown += 1;
            } else if line.contains("OK") {
                info.peers_status_qualified += 1;
            }
        }

        info
    }

    fn read_peer_totals(&self, info: &mut PeersInfo, summary: &str) {
        let numbers = find_numbers(summary, 5);
        if numbers.len() < 5 {
            let err = ParseError::MissingTokens {
                expected: 5,
                found: numbers.len(),
                line: summary.to_string(),
            };
            self.conversion(Family::Peers, &err);
            return;
        }

        let fields = [
            &mut info.sip_peers,
            &mut info.monitored_online,
            &mut info.monitored_offline,
            &mut info.unmonitored_online,
            &mut info.unmonitored_offline,
        ];
        for (field, token) in fields.into_iter().zip(numbers) {
            *field = parse_int(token).unwrap_or_else(|err| {
                self.conversion(Family::Peers, &err);
                UNAVAILABLE
            });
        }
    }

    /// `sip show channels`: `7 active SIP dialogs`
    pub fn sip_dialogs(&self, output: Output<'_>) -> ActiveCount {
        self.sip_count(Family::SipDialogs, output)
    }

    /// `sip show subscriptions`: `7 active SIP subscriptions`
    pub fn sip_subscriptions(&self, output: Output<'_>) -> ActiveCount {
        self.sip_count(Family::SipSubscriptions, output)
    }

    /// `sip show channelstats`: `7 active SIP channels`
    pub fn sip_channels(&self, output: Output<'_>) -> ActiveCount {
        self.sip_count(Family::SipChannels, output)
    }

    fn sip_count(&self, family: Family, output: Output<'_>) -> ActiveCount {
        match output {
            Ok(out) => ActiveCount {
                count: self.summary_count(family, out),
            },
            Err(_) => defaults::ACTIVE_COUNT,
        }
    }

    /// `sip show users`: one row per user under a header
    pub fn users(&self, output: Output<'_>) -> UsersInfo {
        let Ok(out) = output else {
            return defaults::USERS;
        };

        if out.trim().is_empty() {
            self.mismatch(Family::Users, &ParseError::EmptyOutput("users"), out);
            return defaults::USERS;
        }

        UsersInfo {
            users: count_lines(out) as i64 - 1,
        }
    }
}
