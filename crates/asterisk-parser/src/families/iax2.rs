//! `iax2 show channels`

use crate::parser::{Output, OutputParser};
use asterisk_domain::defaults;
use asterisk_domain::{ErrorSink, Family, IaxChannelsInfo};

impl<S: ErrorSink> OutputParser<S> {
    /// The last line reads `7 active IAX channels`
    pub fn iax_channels(&self, output: Output<'_>) -> IaxChannelsInfo {
        match output {
            Ok(out) => IaxChannelsInfo {
                active_count: self.summary_count(Family::IaxChannels, out),
            },
            Err(_) => defaults::IAX_CHANNELS,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::sink::MemorySink;
    use crate::OutputParser;
    use asterisk_domain::{defaults, ExecutionError};

    #[test]
    fn test_iax_channels() {
        let sample = "Channel               Peer                                      Username    ID (Lo/Rem)  Seq (Tx/Rx)  Lag      Jitter  JitBuf  Format  FirstMsg    LastMsg
7 active IAX channels";
        let parser = OutputParser::new(MemorySink::new());
        assert_eq!(parser.iax_channels(Ok(sample)).active_count, 7);
    }

    #[test]
    fn test_iax_channels_unreadable_summary() {
        let parser = OutputParser::new(MemorySink::new());
        assert_eq!(parser.iax_channels(Ok("No such command 'iax2 show channels'")).active_count, -1);
        assert_eq!(parser.sink().len(), 1);

        let err = ExecutionError::new("default error");
        assert_eq!(parser.iax_channels(Err(&err)), defaults::IAX_CHANNELS);
    }
}
