use std::collections::VecDeque;

use rand::RngCore;

/// Random source that replays a fixed script of bounded draws.
///
/// Each queued value resolves `gen_range(0..count)` over `usize` to the
/// requested pick. Running past the end of the script is a test bug and panics.
#[derive(Debug, Default)]
pub struct ScriptedRng {
    values: VecDeque<u64>,
}

impl ScriptedRng {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a draw that lands on `pick` out of `count` equally likely choices.
    pub fn then_pick(mut self, pick: usize, count: usize) -> Self {
        assert!(pick < count, "pick {pick} is outside 0..{count}");
        let count = count as u128;
        let per = ((1u128 << 64) + count - 1) / count;
        self.values.push_back((pick as u128 * per) as u64);
        self
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.values
            .pop_front()
            .expect("scripted random source exhausted")
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
