//! `core show ...`

use super::{flag, AsteriskPoller, Collector};
use crate::exposition::{Desc, MetricsWriter};
use asterisk_domain::Sentinel;

const ACTIVE_CHANNELS: Desc = Desc::gauge("core", "active_channels", "Number of active channels");
const ACTIVE_CALLS: Desc = Desc::gauge("core", "active_calls", "Number of active calls");
const PROCESSED_CALLS: Desc =
    Desc::gauge("core", "processed_calls", "Number of calls processed since startup");
const UPTIME: Desc = Desc::gauge("core", "system_uptime_seconds", "Seconds since system startup");
const LAST_RELOAD: Desc =
    Desc::gauge("core", "last_reload_seconds", "Seconds since last configuration reload");
const IMAGES: Desc = Desc::gauge("core", "images_registered", "Number of registered image formats");

const MEMORY_TOTAL: Desc = Desc::gauge("core", "system_memory_total_bytes", "Total system memory");
const MEMORY_FREE: Desc = Desc::gauge("core", "system_memory_free_bytes", "Free system memory");
const MEMORY_BUFFER: Desc =
    Desc::gauge("core", "system_memory_buffer_bytes", "Buffer system memory");
const SWAP_TOTAL: Desc = Desc::gauge("core", "system_swap_total_bytes", "Total swap space");
const SWAP_FREE: Desc = Desc::gauge("core", "system_swap_free_bytes", "Free swap space");
const PROCESSES: Desc = Desc::gauge("core", "system_processes", "Number of system processes");

const THREADS: Desc = Desc::gauge("core", "thread_count", "Number of threads listed");

const CHANNEL_ACTIVE: Desc =
    Desc::gauge("core", "channel_active", "Channel type supports device state");
const CHANNEL_INDICATION: Desc =
    Desc::gauge("core", "channel_indication", "Channel type supports indications");
const CHANNEL_TRANSFER: Desc =
    Desc::gauge("core", "channel_transfer", "Channel type supports transfer");

const TASK_PROCESSORS: Desc =
    Desc::gauge("core", "tasks_processors", "Number of task processors");
const TASKS_PROCESSED: Desc =
    Desc::counter("core", "tasks_processed_total", "Tasks processed by all task processors");
const TASKS_IN_QUEUE: Desc =
    Desc::gauge("core", "tasks_processes_in_queue", "Tasks waiting in task processor queues");

const VERSION: Desc = Desc::gauge("core", "version", "Asterisk version");

/// Switch-wide counters, host statistics and channel drivers
#[derive(Debug, Clone, Copy, Default)]
pub struct CoreCollector;

impl Collector for CoreCollector {
    fn name(&self) -> &'static str {
        "core"
    }

    fn collect(&self, poller: &AsteriskPoller, out: &mut MetricsWriter) -> bool {
        let channels = poller.channels();
        out.sample(&ACTIVE_CHANNELS, channels.active_channels);
        out.sample(&ACTIVE_CALLS, channels.active_calls);
        out.sample(&PROCESSED_CALLS, channels.processed_calls);

        let uptime = poller.uptime();
        out.sample(&UPTIME, uptime.system_uptime_seconds);
        out.sample(&LAST_RELOAD, uptime.last_reload_seconds);

        let images = poller.images();
        out.sample(&IMAGES, images.registered);

        let system = poller.system_info();
        out.sample(&MEMORY_TOTAL, system.total_memory);
        out.sample(&MEMORY_FREE, system.free_memory);
        out.sample(&MEMORY_BUFFER, system.buffer_memory);
        out.sample(&SWAP_TOTAL, system.total_swap);
        out.sample(&SWAP_FREE, system.free_swap);
        out.sample(&PROCESSES, system.process_count);

        let threads = poller.threads();
        out.sample(&THREADS, threads.thread_count);

        // each family's samples must stay together
        let types = poller.channel_types();
        for channel in &types.channel_types {
            out.labelled(&CHANNEL_ACTIVE, &[("type", channel.name.as_str())], flag(channel.device_state));
        }
        for channel in &types.channel_types {
            out.labelled(&CHANNEL_INDICATION, &[("type", channel.name.as_str())], flag(channel.indications));
        }
        for channel in &types.channel_types {
            out.labelled(&CHANNEL_TRANSFER, &[("type", channel.name.as_str())], flag(channel.transfer));
        }

        let tasks = poller.task_processors();
        out.sample(&TASK_PROCESSORS, tasks.processor_count);
        out.sample(&TASKS_PROCESSED, tasks.processed_tasks_total);
        out.sample(&TASKS_IN_QUEUE, tasks.in_queue);

        let version = poller.version();
        if !version.is_unavailable() {
            out.labelled(&VERSION, &[("version", version.version.as_str())], 1);
        }

        channels.is_unavailable()
            || uptime.is_unavailable()
            || images.is_unavailable()
            || system.is_unavailable()
            || threads.is_unavailable()
            || types.is_unavailable()
            || tasks.is_unavailable()
            || version.is_unavailable()
    }
}
