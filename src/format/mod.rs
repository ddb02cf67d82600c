mod transcript;

pub use transcript::{TRANSCRIPT_WIDTH, render_transcript};
