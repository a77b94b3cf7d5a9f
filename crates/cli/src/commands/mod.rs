mod dispatch;
mod emit;

pub use dispatch::dispatch;
pub use emit::emit;

use crate::HostArgs;
use crate::error::Result;

use consolebridge_host::{ConsoleDispatcher, TerminalConsole, register_console_dispatcher};
use consolebridge_transport::{HostContext, HostContextConfig};

/// Start a host context that writes to this terminal.
fn start_host(args: &HostArgs) -> Result<HostContext> {
    let config = HostContextConfig::default().with_queue_capacity(args.queue_capacity);
    let context = HostContext::new(config);

    let console = TerminalConsole::new(args.color.into());
    register_console_dispatcher(context.registry(), ConsoleDispatcher::new(console));

    context.start()?;

    Ok(context)
}
