use anyhow::Result;
use log::{debug, trace};

use crate::compilation::Compilation;

type AfterEmitFn = Box<dyn Fn(&mut Compilation) -> Result<()>>;

/// Extension point fired once per compilation after all assets are emitted
#[derive(Default)]
pub struct AfterEmitHook {
    taps: Vec<(String, AfterEmitFn)>,
}

impl AfterEmitHook {
    pub fn tap<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&mut Compilation) -> Result<()> + 'static,
    {
        let name = name.into();
        debug!("Tapping after_emit: {}", name);
        self.taps.push((name, Box::new(f)));
    }

    /// Runs every tap in registration order, stopping at the first error
    pub fn call(&self, compilation: &mut Compilation) -> Result<()> {
        for (name, f) in &self.taps {
            trace!("Running after_emit tap: {}", name);
            f(compilation)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.taps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }
}

#[derive(Default)]
pub struct CompilerHooks {
    pub after_emit: AfterEmitHook,
}

#[derive(Default)]
pub struct Compiler {
    pub hooks: CompilerHooks,
}

/// A plugin registers itself on the compiler's hooks
pub trait Plugin {
    fn name(&self) -> &str;

    fn apply(self, compiler: &mut Compiler)
    where
        Self: Sized;
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<P: Plugin>(&mut self, plugin: P) {
        debug!("Registering plugin: {}", plugin.name());
        plugin.apply(self);
    }

    /// Signals that `compilation` finished emitting its assets
    pub fn emit_finished(&self, compilation: &mut Compilation) -> Result<()> {
        debug!("Emit finished for {}", compilation.output_path().display());
        self.hooks.after_emit.call(compilation)
    }
}
