use qub_args::CommandLineArguments;
use qub_streams::{CharacterWriteStream, CharacterWriteStreamList, Stream};

/// The explicit context one program invocation runs against.
///
/// Output and error are fan-out stream lists so a run can duplicate what it
/// writes (console plus a log file, say) without the program code knowing.
/// The exit code accumulates; the entry point hands it to the OS at the
/// end.
pub struct Process {
    arguments: CommandLineArguments,
    output: CharacterWriteStreamList,
    error: CharacterWriteStreamList,
    exit_code: i32,
}

impl Process {
    /// A process with no output sinks yet; callers add the streams they
    /// want writes to reach.
    pub fn create(arguments: CommandLineArguments) -> Self {
        Self {
            arguments,
            output: CharacterWriteStreamList::create(),
            error: CharacterWriteStreamList::create(),
            exit_code: 0,
        }
    }

    pub fn arguments(&self) -> &CommandLineArguments {
        &self.arguments
    }

    pub fn arguments_mut(&mut self) -> &mut CommandLineArguments {
        &mut self.arguments
    }

    pub fn output(&mut self) -> &mut CharacterWriteStreamList {
        &mut self.output
    }

    pub fn error(&mut self) -> &mut CharacterWriteStreamList {
        &mut self.error
    }

    /// Add another sink that every output write will also reach.
    pub fn add_output_stream(&mut self, stream: impl CharacterWriteStream + 'static) {
        self.output.add(stream);
    }

    /// Add another sink that every error write will also reach.
    pub fn add_error_stream(&mut self, stream: impl CharacterWriteStream + 'static) {
        self.error.add(stream);
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub fn set_exit_code(&mut self, exit_code: i32) {
        self.exit_code = exit_code;
    }

    /// Dispose both stream lists. Returns whether this call disposed
    /// anything that was still open.
    pub fn dispose(&mut self) -> bool {
        let output_disposed = self.output.dispose();
        let error_disposed = self.error.dispose();
        output_disposed || error_disposed
    }
}
