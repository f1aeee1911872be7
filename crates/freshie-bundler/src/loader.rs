//! Config loading: the single pass that turns config sources into bundle
//! descriptors.

use std::collections::{HashMap, HashSet};

use freshie_config::{
    ConfigDiscovery, Context, Layer, Options, PresetDiscovery, UI_ALIAS, absolutize,
    insert_alias, merge, resolve_aliases,
};
use tracing::{debug, info, warn};

use crate::args::BuildArgs;
use crate::assemble;
use crate::customize::{BundleFn, Customizer};
use crate::descriptor::ConfigGroup;
use crate::entries::{CLIENT_ENTRY, SSR_ENTRY, find_match, list_files};
use crate::error::{BuildError, Result};
use crate::routes::discover_routes;
use crate::ssr::{self, DEV_RUNTIME, SSR_PRESET, SsrAction};

/// A preset supplied in code instead of from `node_modules`.
#[derive(Clone)]
pub struct Preset {
    layer: Layer,
    customizer: Option<BundleFn>,
}

impl Preset {
    pub fn new(layer: Layer) -> Self {
        Self {
            layer,
            customizer: None,
        }
    }

    pub fn customize<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut crate::BundleConfig, &Options, &Context) + Send + Sync + 'static,
    {
        self.customizer = Some(std::sync::Arc::new(f));
        self
    }
}

/// Builds a [`ConfigGroup`] from the project at `args.cwd`.
///
/// # Example
///
/// ```no_run
/// use freshie_bundler::{BuildArgs, Loader};
///
/// # async fn run() -> freshie_bundler::Result<()> {
/// let mut args = BuildArgs::new(".");
/// args.is_prod = true;
///
/// let group = Loader::new(args).load().await?;
/// println!("client entry: {}", group.client.input.display());
/// # Ok(())
/// # }
/// ```
pub struct Loader {
    args: BuildArgs,
    presets: HashMap<String, Preset>,
}

/// Mutable state threaded through one load
struct LoadState {
    options: Options,
    customizers: Vec<Customizer>,
    context: Context,
    /// Preset names applied so far
    applied: HashSet<String>,
}

impl LoadState {
    fn apply(&mut self, layer: &Layer, customizer: Option<&BundleFn>) -> Result<()> {
        if let Some(f) = customizer {
            self.customizers.push(Customizer::Func {
                source: layer.name().to_string(),
                f: f.clone(),
            });
        }
        if let Some(patch) = layer.bundle() {
            self.customizers
                .push(Customizer::patch(layer.name(), patch.clone()));
        }
        merge(&mut self.options, layer, &self.context)?;
        Ok(())
    }
}

impl Loader {
    pub fn new(args: BuildArgs) -> Self {
        Self {
            args,
            presets: HashMap::new(),
        }
    }

    /// Register a preset under a package name. It replaces the installed
    /// package whenever that name is auto-loaded.
    pub fn preset(mut self, name: impl Into<String>, preset: Preset) -> Self {
        self.presets.insert(name.into(), preset);
        self
    }

    pub fn args(&self) -> &BuildArgs {
        &self.args
    }

    pub async fn load(&self) -> Result<ConfigGroup> {
        let args = self.args.resolved()?;
        let presets = PresetDiscovery::new(&args.cwd);

        let mut state = LoadState {
            options: Options::default(),
            customizers: Vec::new(),
            context: Context::new(args.is_prod),
            applied: HashSet::new(),
        };

        let scoped = presets.list()?;
        for name in &scoped {
            self.autoload(name, &presets, &mut state)?;
        }

        if let Some(layer) = ConfigDiscovery::new(&args.cwd).load()? {
            info!("Applying \"{}\" config", layer.name());
            state.apply(&layer, None)?;
        }

        normalize(&mut state.options, &args)?;

        let routes = discover_routes(&args.src, &state.options.routes).await?;
        if routes.is_empty() {
            return Err(BuildError::NoRoutes(args.src.join(&state.options.routes.dir)));
        }
        debug!(count = routes.len(), "routes discovered");

        let mut client = assemble::client(&args, &routes, &state.options, &state.context);

        match ssr::decide(args.ssr, args.is_prod, state.options.ssr.kind.as_deref()) {
            SsrAction::ForceNode => state.options.ssr.kind = Some(DEV_RUNTIME.to_string()),
            SsrAction::AutoloadPreset => {
                self.autoload(SSR_PRESET, &presets, &mut state)?;
                normalize(&mut state.options, &args)?;
            }
            SsrAction::Disable => state.options.ssr.kind = None,
            SsrAction::Keep => {}
        }

        let mut server = None;
        if args.ssr && state.options.ssr.kind.is_some() {
            for name in scoped.iter().filter(|name| ssr::is_ui_package(name)) {
                insert_alias(&mut state.options, UI_ALIAS, presets.package_dir(name));
            }
            state.context.ssr = true;
            server = Some(assemble::server(
                &args,
                &routes,
                &state.options,
                &state.context,
            ));
        }

        let files = list_files(&args.src).await?;
        if let Some(rel) = find_match(&files, &CLIENT_ENTRY) {
            client.input = args.src.join(rel);
        }
        if let Some(server) = server.as_mut() {
            if let Some(rel) = find_match(&files, &SSR_ENTRY) {
                server.input = args.src.join(rel);
            } else if let Some(entry) = &state.options.ssr.entry {
                server.input = absolutize(&args.cwd, entry)?;
            }
        }

        for name in self.unused_presets(&state.applied) {
            warn!(preset = name, "registered preset is not installed and was never applied");
        }

        for customizer in &state.customizers {
            debug!(source = customizer.source(), "applying bundle customizer");
            customizer.apply(&mut client, &state.options, &state.context)?;
            if let Some(server) = server.as_mut() {
                customizer.apply(server, &state.options, &state.context)?;
            }
        }

        Ok(ConfigGroup {
            options: state.options,
            client,
            server,
        })
    }

    /// Registered presets whose name was never auto-loaded, sorted
    fn unused_presets(&self, applied: &HashSet<String>) -> Vec<&str> {
        let mut unused: Vec<&str> = self
            .presets
            .keys()
            .filter(|name| !applied.contains(*name))
            .map(String::as_str)
            .collect();
        unused.sort_unstable();
        unused
    }

    fn autoload(&self, name: &str, presets: &PresetDiscovery, state: &mut LoadState) -> Result<()> {
        info!("Applying {name} preset");
        state.applied.insert(name.to_string());
        if let Some(preset) = self.presets.get(name) {
            return state.apply(&preset.layer, preset.customizer.as_ref());
        }
        let layer = presets.load(name)?;
        state.apply(&layer, None)
    }
}

/// Post-merge rewrites: alias resolution, absolute copy paths, and the
/// `__DEV__` / `process.env.NODE_ENV` replacements. Idempotent, so it is
/// re-run after any late merge.
fn normalize(options: &mut Options, args: &BuildArgs) -> Result<()> {
    resolve_aliases(options, &args.src)?;

    options.copy = options
        .copy
        .iter()
        .map(|dir| absolutize(&args.src, dir))
        .collect::<freshie_config::Result<_>>()?;

    let env = if args.is_prod {
        "production"
    } else {
        "development"
    };
    options
        .replace
        .insert("__DEV__".to_string(), (!args.is_prod).to_string());
    options
        .replace
        .insert("process.env.NODE_ENV".to_string(), format!("\"{env}\""));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unused_presets_lists_names_never_applied() {
        let loader = Loader::new(BuildArgs::new("/app"))
            .preset("@freshie/ui.preact", Preset::new(Layer::new("ui")))
            .preset("@freshie/ssr.node", Preset::new(Layer::new("ssr")))
            .preset("@freshie/extra", Preset::new(Layer::new("extra")));

        let applied = HashSet::from(["@freshie/ui.preact".to_string()]);
        assert_eq!(
            loader.unused_presets(&applied),
            vec!["@freshie/extra", "@freshie/ssr.node"]
        );
    }

    #[test]
    fn normalize_is_idempotent() {
        let args = BuildArgs::new("/app").resolved().unwrap();
        let mut options = Options::default();
        options
            .alias
            .entries
            .insert("~lib".to_string(), "lib".into());

        normalize(&mut options, &args).unwrap();
        let once = options.clone();
        normalize(&mut options, &args).unwrap();

        assert_eq!(options, once);
        assert_eq!(options.alias.entries["~lib"], std::path::PathBuf::from("/app/src/lib"));
        assert_eq!(options.copy, vec![std::path::PathBuf::from("/app/src/static")]);
        assert_eq!(options.replace["__DEV__"], "true");
        assert_eq!(options.replace["process.env.NODE_ENV"], "\"development\"");
    }
}
