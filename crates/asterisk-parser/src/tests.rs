//! Cross-family behaviour of the parser

#[cfg(test)]
mod tests {
    use crate::{MemorySink, OutputParser};
    use asterisk_domain::{
        defaults, BridgesInfo, ExecutionError, Family, PeersInfo, Record, Severity, UsersInfo,
        VersionInfo,
    };
    use proptest::prelude::*;

    fn parser() -> OutputParser<MemorySink> {
        OutputParser::new(MemorySink::new())
    }

    #[test]
    fn test_execution_error_yields_default_for_every_family() {
        let parser = parser();
        let err = ExecutionError::new("default error");

        for family in Family::ALL {
            let record = parser.parse(family, Err(&err));
            assert_eq!(record, family.default_record(), "family {family}");
            assert!(record.is_unavailable());
            assert_eq!(record.family(), family);
        }
        assert!(parser.sink().is_empty());
    }

    #[test]
    fn test_garbage_reply_yields_default() {
        let partial = [Family::Peers, Family::Bridges, Family::Version, Family::Users];

        for family in Family::ALL {
            if partial.contains(&family) {
                continue;
            }
            let record = parser().parse(family, Ok("???"));
            assert_eq!(record, family.default_record(), "family {family}");
        }
    }

    #[test]
    fn test_garbage_reply_partial_records() {
        let parser = parser();

        let expected_peers = PeersInfo {
            peers_status_unknown: 0,
            peers_status_qualified: 0,
            ..defaults::PEERS
        };
        assert_eq!(
            parser.parse(Family::Peers, Ok("???")),
            Record::Peers(expected_peers)
        );
        assert_eq!(
            parser.parse(Family::Bridges, Ok("???")),
            Record::Bridges(BridgesInfo { count: 0 })
        );
        assert_eq!(
            parser.parse(Family::Users, Ok("???")),
            Record::Users(UsersInfo { users: 0 })
        );
        assert_eq!(
            parser.parse(Family::Version, Ok("???")),
            Record::Version(VersionInfo {
                version: "???".to_string()
            })
        );
    }

    #[test]
    fn test_conversion_events_name_the_command() {
        let samples = [
            (Family::Uptime, "System uptime: abc\nLast reload: 12"),
            (Family::Channels, "x active channels\n2 active calls\n3 calls processed"),
            (Family::Images, "some image formats registered."),
            (Family::IaxChannels, "none active IAX channels"),
            (Family::Modules, "many modules loaded"),
            (Family::SipDialogs, "no active SIP dialogs"),
        ];

        for (family, sample) in samples {
            let parser = parser();
            parser.parse(family, Ok(sample));

            let events = parser.sink().events();
            assert_eq!(events.len(), 1, "family {family}");
            assert_eq!(events[0].field("cmd"), Some(family.command()));
            assert_eq!(events[0].field("line"), Some(sample.lines().next().unwrap()));
        }
    }

    #[test]
    fn test_garbage_reply_is_reported() {
        let loud = [
            Family::Uptime,
            Family::Channels,
            Family::Peers,
            Family::Threads,
            Family::Agents,
            Family::OnlineAgents,
            Family::Calendars,
            Family::ChannelTypes,
            Family::Images,
            Family::TaskProcessors,
            Family::IaxChannels,
            Family::Modules,
            Family::SipDialogs,
            Family::SipSubscriptions,
            Family::SipChannels,
        ];

        for family in loud {
            let parser = parser();
            parser.parse(family, Ok("???"));
            let events = parser.sink().events();
            assert!(!events.is_empty(), "family {family} logged nothing");
            assert!(events.iter().all(|e| e.severity == Severity::Error));
        }
    }

    #[test]
    fn test_empty_reply_never_parses_as_data() {
        for family in Family::ALL {
            let record = parser().parse(family, Ok(""));
            if family == Family::Peers {
                // status counters are still computed, over zero lines
                assert_eq!(record.family(), family);
                continue;
            }
            assert_eq!(record, family.default_record(), "family {family}");
        }
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let parser = parser();
        let samples = [
            (Family::Uptime, "System uptime: 36520\nLast reload: 12345"),
            (Family::Channels, "12 active channels\n25 active calls\n789 calls processed"),
            (
                Family::Peers,
                "Name/username  Host\n5 sip peers [Monitored: 2 online, 3 offline Unmonitored: 4 online, 5 offline]",
            ),
            (Family::SystemInfo, "Total RAM: 5915724 KiB\nNumber of Processes: 294"),
            (
                Family::BridgeTechnologies,
                "Name  Type  Priority Suspended\nsoftmix MultiMix 10 No",
            ),
        ];

        for (family, sample) in samples {
            let first = parser.parse(family, Ok(sample));
            let second = parser.parse(family, Ok(sample));
            assert_eq!(first, second);
            assert!(!first.is_unavailable());
        }
    }

    #[test]
    fn test_parse_wraps_in_matching_variant() {
        let record = parser().parse(Family::SipDialogs, Ok("7 active SIP dialogs"));
        match record {
            Record::SipDialogs(count) => assert_eq!(count.count, 7),
            other => panic!("unexpected record {other:?}"),
        }
    }

    fn console_text() -> impl Strategy<Value = String> {
        prop::collection::vec("[ -~\t]{0,60}", 0..10).prop_map(|lines| lines.join("\n"))
    }

    proptest! {
        #[test]
        fn prop_any_text_never_panics(text in any::<String>()) {
            let parser = parser();
            for family in Family::ALL {
                let record = parser.parse(family, Ok(&text));
                prop_assert_eq!(record.family(), family);
            }
        }

        #[test]
        fn prop_line_shaped_text_never_panics(text in console_text()) {
            let parser = parser();
            for family in Family::ALL {
                let first = parser.parse(family, Ok(&text));
                let second = parser.parse(family, Ok(&text));
                prop_assert_eq!(first, second);
            }
        }

        #[test]
        fn prop_trailing_newline_is_ignored(text in console_text()) {
            prop_assume!(!text.ends_with('\n'));
            let parser = parser();
            for family in [Family::Uptime, Family::Channels, Family::Threads, Family::Modules] {
                let with_newline = format!("{text}\n");
                prop_assert_eq!(
                    parser.parse(family, Ok(&text)),
                    parser.parse(family, Ok(&with_newline))
                );
            }
        }
    }
}
