use tabby::random::RandomSource;
use tabby::{Config, Tabby, UnknownDirective};

/// Replays scripted draws in a cycle, each reduced modulo the requested bound.
#[allow(dead_code)]
pub struct Scripted {
    values: Vec<u64>,
    pos: usize,
}

#[allow(dead_code)]
impl Scripted {
    pub fn new(values: &[u64]) -> Self {
        Self {
            values: values.to_vec(),
            pos: 0,
        }
    }
}

impl RandomSource for Scripted {
    fn below(&mut self, n: u64) -> u64 {
        if n == 0 {
            return 0;
        }
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value % n
    }
}

#[allow(dead_code)]
pub fn create_tabby() -> Tabby {
    Tabby::default()
}

#[allow(dead_code)]
pub fn create_verbatim_tabby() -> Tabby {
    Tabby::with_config(Config {
        unknown: UnknownDirective::Verbatim,
        ..Config::default()
    })
}
