//! `core show ...` replies

use crate::error::ParseError;
use crate::extract::{
    first_token, last_non_empty_line, leading_integer, parse_int, sanitize, trailing_value_after,
    UNAVAILABLE,
};
use crate::parser::{Output, OutputParser};
use crate::size::ram_in_bytes;
use crate::table::ColumnLayout;
use crate::tokens::{find_tokens, find_yes_no};
use asterisk_domain::defaults;
use asterisk_domain::{
    ChannelType, ChannelTypesInfo, ChannelsInfo, ErrorSink, Family, ImagesInfo, SystemInfo,
    TaskProcessorsInfo, ThreadsInfo, UptimeInfo, VersionInfo,
};

const DEVICE_STATE: &str = "Devicestate";

impl<S: ErrorSink> OutputParser<S> {
    /// `core show uptime seconds`
    ///
    /// ```text
    /// System uptime: 36520
    /// Last reload: 12345
    /// ```
    pub fn uptime(&self, output: Output<'_>) -> UptimeInfo {
        let Ok(out) = output else {
            return defaults::UPTIME;
        };

        let lines: Vec<&str> = sanitize(out).split('\n').collect();
        if lines.len() != 2 {
            let err = ParseError::LineCount {
                family: Family::Uptime.as_str(),
                expected: 2,
                actual: lines.len(),
            };
            self.mismatch(Family::Uptime, &err, out);
            return defaults::UPTIME;
        }

        let sink = self.command_sink(Family::Uptime);
        UptimeInfo {
            system_uptime_seconds: trailing_value_after(lines[0], ':', &sink),
            last_reload_seconds: trailing_value_after(lines[1], ':', &sink),
        }
    }

    /// `core show channels count`
    ///
    /// ```text
    /// 12 active channels
    /// 25 active calls
    /// 789 calls processed
    /// ```
    pub fn channels(&self, output: Output<'_>) -> ChannelsInfo {
        let Ok(out) = output else {
            return defaults::CHANNELS;
        };

        let lines: Vec<&str> = sanitize(out).split('\n').collect();
        if lines.len() != 3 {
            let err = ParseError::LineCount {
                family: Family::Channels.as_str(),
                expected: 3,
                actual: lines.len(),
            };
            self.mismatch(Family::Channels, &err, out);
            return defaults::CHANNELS;
        }

        let sink = self.command_sink(Family::Channels);
        ChannelsInfo {
            active_channels: leading_integer(lines[0], &sink),
            active_calls: leading_integer(lines[1], &sink),
            processed_calls: leading_integer(lines[2], &sink),
        }
    }

    /// `core show threads`: the last line reads `9 threads listed.`
    pub fn threads(&self, output: Output<'_>) -> ThreadsInfo {
        let Ok(out) = output else {
            return defaults::THREADS;
        };

        let last = last_non_empty_line(out);
        if last.trim().is_empty() {
            self.mismatch(Family::Threads, &ParseError::EmptyOutput("threads"), out);
            return defaults::THREADS;
        }

        match parse_int(first_token(last)) {
            Ok(thread_count) => ThreadsInfo { thread_count },
            Err(err) => {
                self.mismatch(Family::Threads, &err, last);
                defaults::THREADS
            }
        }
    }

    /// `core show channeltypes`
    ///
    /// ```text
    /// Type        Description                  Devicestate  Indications  Transfer
    /// ----------- -----------                  -----------  -----------  --------
    /// Recorder    Bridge Media Recording       no           yes          no
    /// ----------
    /// 1 channel drivers registered.
    /// ```
    ///
    /// The flags are read from the `Devicestate` column onward because the
    /// description column contains free text.
    pub fn channel_types(&self, output: Output<'_>) -> ChannelTypesInfo {
        let Ok(out) = output else {
            return defaults::CHANNEL_TYPES;
        };

        let lines: Vec<&str> = sanitize(out).split('\n').collect();
        if lines.len() < 4 {
            let err = ParseError::LineCount {
                family: Family::ChannelTypes.as_str(),
                expected: 4,
                actual: lines.len(),
            };
            self.mismatch(Family::ChannelTypes, &err, out);
            return defaults::CHANNEL_TYPES;
        }

        let layout = match ColumnLayout::locate(lines[0], &[DEVICE_STATE]) {
            Ok(layout) => layout,
            Err(err) => {
                self.mismatch(Family::ChannelTypes, &err, lines[0]);
                return defaults::CHANNEL_TYPES;
            }
        };

        let rows = &lines[2..lines.len() - 2];
        let mut channel_types = Vec::with_capacity(rows.len());
        for row in rows {
            match read_channel_type(&layout, row) {
                Ok(channel_type) => channel_types.push(channel_type),
                Err(err) => {
                    self.mismatch(Family::ChannelTypes, &err, row);
                    return defaults::CHANNEL_TYPES;
                }
            }
        }

        ChannelTypesInfo { channel_types }
    }

    /// `core show image formats`: the last line reads `3 image formats registered.`
    pub fn images(&self, output: Output<'_>) -> ImagesInfo {
        match output {
            Ok(out) => ImagesInfo {
                registered: self.summary_count(Family::Images, out),
            },
            Err(_) => defaults::IMAGES,
        }
    }

    /// `core show sysinfo`
    ///
    /// Each field is filled independently from its own `key: value` line; a
    /// missing or unreadable line leaves that field at `-1`.
    pub fn system_info(&self, output: Output<'_>) -> SystemInfo {
        let Ok(out) = output else {
            return defaults::SYSTEM;
        };

        if out.trim().is_empty() {
            self.mismatch(Family::SystemInfo, &ParseError::EmptyOutput("system_info"), out);
            return defaults::SYSTEM;
        }

        let mut info = defaults::SYSTEM;
        for line in out.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim();

            let field = match key.trim() {
                "Total RAM" => &mut info.total_memory,
                "Free RAM" => &mut info.free_memory,
                "Buffer RAM" => &mut info.buffer_memory,
                "Total Swap Space" => &mut info.total_swap,
                "Free Swap Space" => &mut info.free_swap,
                "Number of Processes" => {
                    info.process_count = self.converted(parse_int(value));
                    continue;
                }
                _ => continue,
            };
            *field = self.converted(ram_in_bytes(value));
        }

        info
    }

    /// `core show taskprocessors`
    ///
    /// ```text
    /// Processor                 Processed   In Queue  Max Depth  Low water High water
    /// app_voicemail                     0          0          0        450        500
    /// subm:ast_system-00000006          5          2         15        450        500
    ///
    /// 2 taskprocessors
    /// ```
    ///
    /// Blank lines are ignored; the first remaining line is the header and the
    /// last is the footer.
    pub fn task_processors(&self, output: Output<'_>) -> TaskProcessorsInfo {
        let Ok(out) = output else {
            return defaults::TASK_PROCESSORS;
        };

        let lines: Vec<&str> = out.lines().filter(|l| !l.trim().is_empty()).collect();
        if lines.len() < 2 {
            let err = ParseError::LineCount {
                family: Family::TaskProcessors.as_str(),
                expected: 2,
                actual: lines.len(),
            };
            self.mismatch(Family::TaskProcessors, &err, out);
            return defaults::TASK_PROCESSORS;
        }

        let mut totals = TaskProcessorsInfo {
            processor_count: 0,
            processed_tasks_total: 0,
            in_queue: 0,
        };
        for row in &lines[1..lines.len() - 1] {
            let cells = find_tokens(row, 3);
            if cells.len() < 3 {
                let err = ParseError::MissingTokens {
                    expected: 3,
                    found: cells.len(),
                    line: row.to_string(),
                };
                self.conversion(Family::TaskProcessors, &err);
            }

            totals.processed_tasks_total += self.cell_or_zero(cells.get(1).copied());
            totals.in_queue += self.cell_or_zero(cells.get(2).copied());
            totals.processor_count += 1;
        }

        totals
    }

    /// `core show version`: the banner is passed through as-is
    pub fn version(&self, output: Output<'_>) -> VersionInfo {
        let Ok(out) = output else {
            return defaults::VERSION;
        };

        let version = sanitize(out);
        if version.is_empty() {
            self.mismatch(Family::Version, &ParseError::EmptyOutput("version"), out);
        }
        VersionInfo {
            version: version.to_string(),
        }
    }

    fn converted(&self, value: Result<i64, ParseError>) -> i64 {
        value.unwrap_or_else(|err| {
            self.conversion(Family::SystemInfo, &err);
            UNAVAILABLE
        })
    }

    fn cell_or_zero(&self, cell: Option<&str>) -> i64 {
        let Some(cell) = cell else {
            return 0;
        };
        parse_int(cell).unwrap_or_else(|err| {
            self.conversion(Family::TaskProcessors, &err);
            0
        })
    }
}

fn read_channel_type(layout: &ColumnLayout, row: &str) -> Result<ChannelType, ParseError> {
    let cells = layout.slice_from(row, DEVICE_STATE)?;
    let flags = find_yes_no(cells, 3);
    if flags.len() < 3 {
        return Err(ParseError::MissingTokens {
            expected: 3,
            found: flags.len(),
            line: row.to_string(),
        });
    }

    Ok(ChannelType {
        name: first_token(row).to_string(),
        device_state: flags[0] == "yes",
        indications: flags[1] == "yes",
        transfer: flags[2] == "yes",
    })
}

#[cfg(test)]
mod tests {
    use crate::sink::MemorySink;
    use crate::OutputParser;
    use asterisk_domain::{defaults, ChannelType, ExecutionError, SystemInfo, TaskProcessorsInfo};

    fn parser() -> OutputParser<MemorySink> {
        OutputParser::new(MemorySink::new())
    }

    #[test]
    fn test_uptime_valid_output() {
        let info = parser().uptime(Ok("System uptime: 36520\nLast reload: 12345"));
        assert_eq!(info.system_uptime_seconds, 36520);
        assert_eq!(info.last_reload_seconds, 12345);
    }

    #[test]
    fn test_uptime_trailing_newline() {
        let info = parser().uptime(Ok("System uptime: 1\nLast reload: 2\n"));
        assert_eq!(info.system_uptime_seconds, 1);
        assert_eq!(info.last_reload_seconds, 2);
    }

    #[test]
    fn test_uptime_invalid_output() {
        let parser = parser();
        assert_eq!(parser.uptime(Ok("System uptime: 36520")), defaults::UPTIME);
        assert_eq!(parser.sink().len(), 1);
        assert_eq!(
            parser.sink().events()[0].field("cmd"),
            Some("core show uptime seconds")
        );
    }

    #[test]
    fn test_uptime_unreadable_value_defaults_that_field() {
        let info = parser().uptime(Ok("System uptime: soon\nLast reload: 12"));
        assert_eq!(info.system_uptime_seconds, -1);
        assert_eq!(info.last_reload_seconds, 12);
    }

    #[test]
    fn test_uptime_command_error() {
        let parser = parser();
        let err = ExecutionError::new("default error");
        assert_eq!(parser.uptime(Err(&err)), defaults::UPTIME);
        assert!(parser.sink().is_empty());
    }

    #[test]
    fn test_channels_valid_output() {
        let info = parser().channels(Ok("12 active channels\n25 active calls\n789 calls processed"));
        assert_eq!(info.active_channels, 12);
        assert_eq!(info.active_calls, 25);
        assert_eq!(info.processed_calls, 789);
    }

    #[test]
    fn test_channels_invalid_output() {
        assert_eq!(parser().channels(Ok("12 active channels")), defaults::CHANNELS);
    }

    #[test]
    fn test_channels_command_error() {
        let err = ExecutionError::new("default error");
        assert_eq!(parser().channels(Err(&err)), defaults::CHANNELS);
    }

    #[test]
    fn test_threads_valid_output() {
        let sample = "\
0x7f67583ae700 3695 netconsole           started at [ 1639] asterisk.c listener()
0x7f67b0713700 18 default_tps_processing_function started at [  202] taskprocessor.c default_listener_start()
0x7f67b0697700 19 bridge_manager_thread started at [ 4869] bridge.c bridge_manager_create()
0x7f67b078f700 17 db_sync_thread       started at [ 1022] db.c astdb_init()
0x7f67b080b700 16 default_tps_processing_function started at [  202] taskprocessor.c default_listener_start()
0x7f67b09fb700 12 logger_thread        started at [ 1595] logger.c init_logger()
0x7f67b0af3700 9 listener             started at [ 1699] asterisk.c ast_makesocket()
0x7f67b4dce700 8 default_tps_processing_function started at [  202] taskprocessor.c default_listener_start()
0x7f67b4e4a700 7 default_tps_processing_function started at [  202] taskprocessor.c default_listener_start()
9 threads listed.";
        assert_eq!(parser().threads(Ok(sample)).thread_count, 9);
    }

    #[test]
    fn test_threads_zero_and_one() {
        assert_eq!(parser().threads(Ok("0 threads listed.")).thread_count, 0);

        let one = "0x7f67b09fb700 12 logger_thread        started at [ 1595] logger.c init_logger()\n1 threads listed.\n";
        assert_eq!(parser().threads(Ok(one)).thread_count, 1);
    }

    #[test]
    fn test_threads_unreadable_summary() {
        let parser = parser();
        assert_eq!(parser.threads(Ok("threads: many")), defaults::THREADS);
        assert_eq!(parser.threads(Ok("")), defaults::THREADS);
        assert_eq!(parser.sink().len(), 2);
    }

    const CHANNEL_TYPES: &str = "\
Type             Description                              Devicestate  Indications  Transfer
-----------      -----------                              -----------  -----------  -----------
Recorder         Bridge Media Recording Channel Driver    no           yes          no
Announcer        Bridge Media Announcing Channel Driver   yes           yes          no
CBAnn            Conference Bridge Announcing Channel     no           no          yes
----------
3 channel drivers registered.";

    #[test]
    fn test_channel_types_valid_output() {
        let info = parser().channel_types(Ok(CHANNEL_TYPES));

        let expected = vec![
            ChannelType {
                name: "Recorder".to_string(),
                device_state: false,
                indications: true,
                transfer: false,
            },
            ChannelType {
                name: "Announcer".to_string(),
                device_state: true,
                indications: true,
                transfer: false,
            },
            ChannelType {
                name: "CBAnn".to_string(),
                device_state: false,
                indications: false,
                transfer: true,
            },
        ];
        assert_eq!(info.channel_types, expected);
    }

    #[test]
    fn test_channel_types_indented_name() {
        // same width as the original cell, so the flag columns do not move
        let sample = CHANNEL_TYPES.replace("Recorder  ", "  Recorder");
        let parser = parser();
        let info = parser.channel_types(Ok(&sample));

        assert_eq!(info.channel_types.len(), 3);
        assert_eq!(info.channel_types[0].name, "Recorder");
        assert!(!info.channel_types[0].device_state);
        assert!(info.channel_types[0].indications);
        assert!(parser.sink().is_empty());
    }

    #[test]
    fn test_channel_types_no_drivers() {
        let sample = "Type  Description  Devicestate  Indications  Transfer\n----  -----------  -----------  -----------  --------\n----------\n0 channel drivers registered.";
        let parser = parser();
        assert!(parser.channel_types(Ok(sample)).channel_types.is_empty());
        assert!(parser.sink().is_empty());
    }

    #[test]
    fn test_channel_types_missing_anchor_fails_loudly() {
        let sample = CHANNEL_TYPES.replace("Devicestate", "State      ");
        let parser = parser();
        assert_eq!(parser.channel_types(Ok(&sample)), defaults::CHANNEL_TYPES);

        let events = parser.sink().events();
        assert_eq!(events.len(), 1);
        assert!(events[0].field("err").unwrap().contains("Devicestate"));
    }

    #[test]
    fn test_channel_types_short_row() {
        let sample = "\
Type             Description                              Devicestate  Indications  Transfer
-----------      -----------                              -----------  -----------  --------
Recorder         Bridge Media Recording
----------
1 channel drivers registered.";
        assert_eq!(parser().channel_types(Ok(sample)), defaults::CHANNEL_TYPES);
    }

    #[test]
    fn test_images_valid_output() {
        let sample = "      Name Extensions                                        Description     Format\n\t---- ----------                                        -----------     ------\n3 image formats registered.";
        assert_eq!(parser().images(Ok(sample)).registered, 3);
    }

    const SYSINFO: &str = "
\tSystem Statistics
\t-----------------
\t  System Uptime:             61 hours
\t  Total RAM:                 5915724 KiB
\t  Free RAM:                  148876 KiB
\t  Buffer RAM:                228980 KiB
\t  Total Swap Space:          786428 KiB
\t  Free Swap Space:           786428 KiB
\t
\t  Number of Processes:       294
\t
\t";

    #[test]
    fn test_system_info_valid_output() {
        let info = parser().system_info(Ok(SYSINFO));
        let expected = SystemInfo {
            total_memory: 5915724 * 1024,
            free_memory: 148876 * 1024,
            buffer_memory: 228980 * 1024,
            total_swap: 786428 * 1024,
            free_swap: 786428 * 1024,
            process_count: 294,
        };
        assert_eq!(info, expected);
    }

    #[test]
    fn test_system_info_single_line() {
        let info = parser().system_info(Ok("Total RAM: 5915724 KiB"));
        assert_eq!(info.total_memory, 5915724 * 1024);
        assert_eq!(info.free_memory, -1);
        assert_eq!(info.process_count, -1);
    }

    #[test]
    fn test_system_info_unknown_key_is_skipped() {
        let parser = parser();
        let info = parser.system_info(Ok("Favourite Colour: blue\nNumber of Processes: 12"));
        assert_eq!(info.process_count, 12);
        assert_eq!(info.total_memory, -1);
        assert!(parser.sink().is_empty());
    }

    #[test]
    fn test_system_info_bad_value_defaults_that_field() {
        let parser = parser();
        let info = parser.system_info(Ok("Total RAM: lots\nFree RAM: 1 KiB\nNumber of Processes: many"));
        assert_eq!(info.total_memory, -1);
        assert_eq!(info.free_memory, 1024);
        assert_eq!(info.process_count, -1);
        assert_eq!(parser.sink().len(), 2);
    }

    #[test]
    fn test_task_processors_valid_output() {
        let sample = "
\tProcessor                                      Processed   In Queue  Max Depth  Low water High water
app_voicemail                                          0          0          0        450        500
ast_msg_queue                                          0          3          0        450        500
CCSS_core                                              1          0          1        450        500
hep_queue_tp                                           0          0          0        450        500
subm:ast_system-00000006                              5          2         15        450        500
subm:ast_system-00000041                              6          7          5        450        500
subm:ast_system-00000043                              7          0          5        450        500

7 taskprocessors
";
        let info = parser().task_processors(Ok(sample));
        let expected = TaskProcessorsInfo {
            processor_count: 7,
            processed_tasks_total: 19,
            in_queue: 12,
        };
        assert_eq!(info, expected);
    }

    #[test]
    fn test_task_processors_bad_cell_contributes_zero() {
        let sample = "Processor  Processed  In Queue\na  4  x\nb  y  2\n2 taskprocessors";
        let parser = parser();
        let info = parser.task_processors(Ok(sample));
        assert_eq!(info.processor_count, 2);
        assert_eq!(info.processed_tasks_total, 4);
        assert_eq!(info.in_queue, 2);
        assert_eq!(parser.sink().len(), 2);
    }

    #[test]
    fn test_task_processors_header_only() {
        assert_eq!(parser().task_processors(Ok("Processor")), defaults::TASK_PROCESSORS);
    }

    #[test]
    fn test_version_passthrough() {
        let sample = "Asterisk certified/13.8-cert4 built by root @ 1b0d6163fdc2 on a x86_64 running Linux on 2017-09-01 18:37:56 UTC";
        assert_eq!(parser().version(Ok(sample)).version, sample);
        assert_eq!(parser().version(Ok("Asterisk 18.0.0\n")).version, "Asterisk 18.0.0");
    }

    #[test]
    fn test_version_command_error() {
        let err = ExecutionError::new("default error");
        assert_eq!(parser().version(Err(&err)), defaults::VERSION);
    }
}
