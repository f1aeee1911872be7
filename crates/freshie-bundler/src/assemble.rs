//! Client and server descriptor assembly.

use freshie_config::{Context, Options, PluginConfig};
use indexmap::IndexMap;
use serde_json::Value;

use crate::args::BuildArgs;
use crate::descriptor::{
    BundleConfig, EntrySignatures, OutputOptions, SignaturePolicy, Treeshake, TreeshakeOptions,
};
use crate::plugins::{Plugin, PluginRegistry};
use crate::routes::Route;

/// Default client entry before auto-detection
pub const CLIENT_INPUT: &str = "index.dom.js";
/// Default server entry before auto-detection
pub const SERVER_INPUT: &str = "index.ssr.js";

/// Browser bundle written to `<dest>/client`.
///
/// `args` must already be resolved (absolute `src` / `dest`).
pub fn client(
    args: &BuildArgs,
    routes: &[Route],
    options: &Options,
    context: &Context,
) -> BundleConfig {
    let is_prod = context.is_prod;

    let mut plugins = PluginRegistry::new();
    plugins.add(Plugin::Router);
    plugins.add(Plugin::Copy {
        paths: options.copy.clone(),
    });
    plugins.add(Plugin::Runtime {
        routes: routes.to_vec(),
        is_dom: true,
    });
    plugins.add(Plugin::Summary { is_dom: true });
    add_shared(&mut plugins, args, options, context, true);
    plugins.add(Plugin::CommonJs {
        options: options.commonjs.clone(),
    });
    add_minifier(&mut plugins, args, options);

    let (entry, asset, chunk) = if is_prod {
        ("[name].[hash].js", "[name].[hash].[ext]", "[name].[hash].js")
    } else {
        ("[name].js", "[name].[ext]", "[name].js")
    };

    BundleConfig {
        input: args.src.join(CLIENT_INPUT),
        output: OutputOptions {
            dir: Some(args.dest.join("client")),
            file: None,
            sourcemap: !is_prod,
            minify_internal_exports: is_prod,
            entry_file_names: Some(entry.to_string()),
            asset_file_names: Some(asset.to_string()),
            chunk_file_names: Some(chunk.to_string()),
        },
        preserve_entry_signatures: Some(if is_prod {
            EntrySignatures::Toggle(false)
        } else {
            EntrySignatures::Policy(SignaturePolicy::Strict)
        }),
        treeshake: if is_prod {
            Treeshake::Options(TreeshakeOptions {
                property_read_side_effects: None,
                module_side_effects: "no-external".to_string(),
                try_catch_deoptimization: false,
            })
        } else {
            Treeshake::Toggle(false)
        },
        plugins,
    }
}

/// Server bundle written to `<dest>/server/index.js`.
pub fn server(
    args: &BuildArgs,
    routes: &[Route],
    options: &Options,
    context: &Context,
) -> BundleConfig {
    let mut plugins = PluginRegistry::new();
    plugins.add(Plugin::Runtime {
        routes: routes.to_vec(),
        is_dom: false,
    });
    plugins.add(Plugin::Summary { is_dom: false });
    add_shared(&mut plugins, args, options, context, false);
    add_minifier(&mut plugins, args, options);

    BundleConfig {
        input: args.src.join(SERVER_INPUT),
        output: OutputOptions {
            file: Some(args.dest.join("server").join("index.js")),
            sourcemap: !context.is_prod,
            minify_internal_exports: context.is_prod,
            ..OutputOptions::default()
        },
        preserve_entry_signatures: None,
        treeshake: Treeshake::Options(TreeshakeOptions {
            property_read_side_effects: Some(false),
            module_side_effects: "no-external".to_string(),
            try_catch_deoptimization: false,
        }),
        plugins,
    }
}

/// alias → replace → resolve → json, common to both targets
fn add_shared(
    plugins: &mut PluginRegistry,
    args: &BuildArgs,
    options: &Options,
    context: &Context,
    is_dom: bool,
) {
    plugins.add(Plugin::Alias {
        entries: options.alias.entries.clone(),
    });
    plugins.add(Plugin::Replace {
        values: replacements(&options.replace, is_dom),
    });

    let mut resolve = options.resolve.clone();
    resolve.insert(
        "rootDir".to_string(),
        Value::String(args.src.to_string_lossy().into_owned()),
    );
    plugins.add(Plugin::Resolve { options: resolve });

    let mut json = PluginConfig::new();
    json.insert("compact".to_string(), Value::Bool(context.is_prod));
    json.extend(options.json.clone());
    plugins.add(Plugin::Json { options: json });
}

fn add_minifier(plugins: &mut PluginRegistry, args: &BuildArgs, options: &Options) {
    if args.minify {
        plugins.add(Plugin::Terser {
            options: options.terser.clone(),
        });
    }
}

/// User replacements plus the browser-detection flags for this target
fn replacements(base: &IndexMap<String, String>, is_dom: bool) -> IndexMap<String, String> {
    let flag = is_dom.to_string();
    let mut values = base.clone();
    values.insert("__BROWSER__".to_string(), flag.clone());
    values.insert("process.browser".to_string(), flag);
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    fn args(minify: bool) -> BuildArgs {
        BuildArgs {
            minify,
            ..BuildArgs::new("/app").resolved().unwrap()
        }
    }

    #[test]
    fn client_plugin_order() {
        let bundle = client(&args(true), &[], &Options::default(), &Context::new(true));
        assert_eq!(
            bundle.plugins.names(),
            vec![
                "router", "copy", "runtime", "summary", "alias", "replace", "resolve", "json",
                "commonjs", "terser"
            ]
        );
    }

    #[test]
    fn server_plugin_order_omits_client_only_plugins() {
        let bundle = server(&args(false), &[], &Options::default(), &Context::new(false));
        assert_eq!(
            bundle.plugins.names(),
            vec!["runtime", "summary", "alias", "replace", "resolve", "json"]
        );
    }

    #[test]
    fn client_dev_output() {
        let bundle = client(&args(false), &[], &Options::default(), &Context::new(false));
        assert_eq!(bundle.input, PathBuf::from("/app/src/index.dom.js"));
        assert_eq!(bundle.output.dir, Some(PathBuf::from("/app/build/client")));
        assert!(bundle.output.sourcemap);
        assert_eq!(bundle.output.entry_file_names.as_deref(), Some("[name].js"));
        assert_eq!(bundle.treeshake, Treeshake::Toggle(false));
        assert_eq!(
            bundle.preserve_entry_signatures,
            Some(EntrySignatures::Policy(SignaturePolicy::Strict))
        );
    }

    #[test]
    fn client_prod_output_is_hashed() {
        let bundle = client(&args(false), &[], &Options::default(), &Context::new(true));
        assert!(!bundle.output.sourcemap);
        assert!(bundle.output.minify_internal_exports);
        assert_eq!(
            bundle.output.asset_file_names.as_deref(),
            Some("[name].[hash].[ext]")
        );
        assert!(matches!(bundle.treeshake, Treeshake::Options(_)));
        assert_eq!(
            bundle.preserve_entry_signatures,
            Some(EntrySignatures::Toggle(false))
        );
    }

    #[test]
    fn server_writes_single_file() {
        let bundle = server(&args(false), &[], &Options::default(), &Context::new(true));
        assert_eq!(
            bundle.output.file,
            Some(PathBuf::from("/app/build/server/index.js"))
        );
        assert!(bundle.output.dir.is_none());
        match bundle.treeshake {
            Treeshake::Options(opts) => assert_eq!(opts.property_read_side_effects, Some(false)),
            other => panic!("unexpected treeshake: {other:?}"),
        }
    }

    #[test]
    fn browser_flags_are_inverted_for_server() {
        let mut options = Options::default();
        options
            .replace
            .insert("__BROWSER__".to_string(), "maybe".to_string());

        let client = client(&args(false), &[], &options, &Context::default());
        let server = server(&args(false), &[], &options, &Context::default());

        let Some(Plugin::Replace { values }) = client.plugins.get("replace") else {
            panic!("client has no replace plugin");
        };
        assert_eq!(values["__BROWSER__"], "true");
        assert_eq!(values["process.browser"], "true");

        let Some(Plugin::Replace { values }) = server.plugins.get("replace") else {
            panic!("server has no replace plugin");
        };
        assert_eq!(values["__BROWSER__"], "false");
        assert_eq!(values["process.browser"], "false");
    }

    #[test]
    fn json_options_override_compact_and_resolve_root_wins() {
        let mut options = Options::default();
        options.json.insert("compact".into(), json!(true));
        options.resolve.insert("rootDir".into(), json!("/elsewhere"));

        let bundle = client(&args(false), &[], &options, &Context::new(false));

        let Some(Plugin::Json { options: json_opts }) = bundle.plugins.get("json") else {
            panic!("missing json plugin");
        };
        assert_eq!(json_opts["compact"], json!(true));

        let Some(Plugin::Resolve { options: resolve }) = bundle.plugins.get("resolve") else {
            panic!("missing resolve plugin");
        };
        assert_eq!(resolve["rootDir"], json!("/app/src"));
    }
}
