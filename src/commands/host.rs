use std::io::{Read, Write};

/// Abstract the host environment to enable testing
pub trait Host: Send + Sync {
    // where to read primary input (e.g., stdin)
    fn input(&mut self) -> impl Read;

    // where to send normal output (e.g., stdout)
    fn output(&mut self) -> impl Write;

    // where to send error output (e.g., stderr)
    fn error(&mut self) -> impl Write;

    /// Terminate the process (although in a test environment this might just set a flag and return).
    fn exit(&mut self, code: i32);
}

/// Test host that feeds canned input and captures output to in-memory buffers
#[cfg(test)]
pub struct TestHost {
    pub input_buf: Vec<u8>,
    pub output_buf: Vec<u8>,
    pub error_buf: Vec<u8>,
}

#[cfg(test)]
impl TestHost {
    pub fn new() -> Self {
        Self {
            input_buf: Vec::new(),
            output_buf: Vec::new(),
            error_buf: Vec::new(),
        }
    }

    pub fn with_input(input: &str) -> Self {
        Self {
            input_buf: input.as_bytes().to_vec(),
            output_buf: Vec::new(),
            error_buf: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Host for TestHost {
    fn input(&mut self) -> impl Read {
        std::io::Cursor::new(&mut self.input_buf)
    }

    // Plain Vec writers so successive calls append instead of rewinding.
    fn output(&mut self) -> impl Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl Write {
        &mut self.error_buf
    }

    fn exit(&mut self, _code: i32) {
        // In tests, don't actually exit
    }
}
