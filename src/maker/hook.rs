//! The `getAppBuilderConfig` hook.
//!
//! A hook takes no input and asynchronously produces an open, string-keyed
//! mapping that is merged into the app builder configuration. Hooks come
//! either from code ([`AppBuilderConfigHook::from_fn`], or any
//! [`AppBuilderConfigSource`]) or from a declarative config entry:
//!
//! ```toml
//! # read a JSON / TOML / YAML file
//! appBuilderConfig = { file = "electron-builder.json" }
//!
//! # or run a command that prints JSON on stdout
//! appBuilderConfig = { command = "node", args = ["builder-config.js"], timeoutSecs = 30 }
//! ```
//!
//! Whatever the source, the result must be a mapping. Anything else is a
//! contract violation and resolution aborts with [`Error::HookContract`].

use crate::maker::error::{Error, ErrorExt, Result};
use path_absolutize::Absolutize;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::{
    fmt,
    future::Future,
    path::{Path, PathBuf},
    pin::Pin,
    process::Stdio,
    sync::Arc,
    time::Duration,
};

/// Boxed, sendable future returned by hook sources.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Something that can produce an app builder config on demand.
///
/// May perform I/O; no purity is assumed.
pub trait AppBuilderConfigSource: Send + Sync {
    /// Produce the config value.
    fn load(&self) -> BoxFuture<'_, anyhow::Result<Value>>;
}

struct FnSource<F>(F);

impl<F, Fut> AppBuilderConfigSource for FnSource<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<Value>> + Send + 'static,
{
    fn load(&self) -> BoxFuture<'_, anyhow::Result<Value>> {
        Box::pin((self.0)())
    }
}

/// Declarative hook: read a config file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FileSource {
    /// File to read; format chosen by extension (`json`, `toml`, `yml`/`yaml`).
    pub file: PathBuf,
}

/// Declarative hook: run a command and parse its stdout as JSON.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CommandSource {
    /// Program to run.
    pub command: String,

    /// Arguments.
    #[serde(default)]
    pub args: Vec<String>,

    /// Working directory. Defaults to the config file's directory.
    #[serde(default)]
    pub cwd: Option<PathBuf>,

    /// Kill the command after this many seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Declarative hook source as written in a config file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum HookSource {
    /// `{ file = "..." }`
    File(FileSource),
    /// `{ command = "...", args = [...] }`
    Command(CommandSource),
}

impl HookSource {
    /// Resolve relative paths against `base` (the config file's directory).
    pub fn rebase(&mut self, base: &Path) -> Result<()> {
        match self {
            HookSource::File(source) => {
                source.file = absolutize_from(&source.file, base)?;
            }
            HookSource::Command(source) => {
                let cwd = match &source.cwd {
                    Some(cwd) => absolutize_from(cwd, base)?,
                    None => base.to_path_buf(),
                };
                // Bare program names are looked up on PATH; only explicit paths are rebased.
                if source.command.contains('/') || source.command.contains('\\') {
                    source.command = absolutize_from(Path::new(&source.command), base)?
                        .display()
                        .to_string();
                }
                source.cwd = Some(cwd);
            }
        }
        Ok(())
    }
}

fn absolutize_from(path: &Path, base: &Path) -> Result<PathBuf> {
    path.absolutize_from(base)
        .map(|p| p.into_owned())
        .map_err(|source| Error::Fs {
            context: "resolving hook path",
            path: path.to_path_buf(),
            source,
        })
}

impl FileSource {
    async fn read(&self) -> anyhow::Result<Value> {
        log::debug!("Reading app builder config from {}", self.file.display());
        let content = tokio::fs::read_to_string(&self.file)
            .await
            .fs_context("reading app builder config", &self.file)?;
        Ok(parse_document(&self.file, &content)?)
    }
}

impl AppBuilderConfigSource for FileSource {
    fn load(&self) -> BoxFuture<'_, anyhow::Result<Value>> {
        Box::pin(self.read())
    }
}

/// Parse a JSON, TOML or YAML document into an untyped value.
pub(crate) fn parse_document(path: &Path, content: &str) -> Result<Value> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("json") => Ok(serde_json::from_str(content)?),
        Some("toml") => Ok(toml::from_str(content)?),
        Some("yml") | Some("yaml") => Ok(serde_yaml_bw::from_str(content)?),
        _ => Err(Error::Config {
            path: path.to_path_buf(),
            reason: "unsupported file extension (expected .json, .toml, .yml or .yaml)".into(),
        }),
    }
}

impl CommandSource {
    async fn run(&self) -> anyhow::Result<Value> {
        log::info!("Running app builder config command: {}", self.command);

        let mut cmd = tokio::process::Command::new(&self.command);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }

        let child = cmd.spawn().map_err(|error| Error::CommandFailed {
            command: self.command.clone(),
            error,
        })?;

        let output = match self.timeout_secs {
            Some(secs) => {
                let limit = Duration::from_secs(secs);
                tokio::time::timeout(limit, child.wait_with_output())
                    .await
                    .map_err(|_| Error::HookTimeout(limit))?
            }
            None => child.wait_with_output().await,
        }
        .map_err(|error| Error::CommandFailed {
            command: self.command.clone(),
            error,
        })?;

        if !output.status.success() {
            anyhow::bail!(
                "`{}` exited with {}: {}",
                self.command,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let value = serde_json::from_slice(&output.stdout)?;
        Ok(value)
    }
}

impl AppBuilderConfigSource for CommandSource {
    fn load(&self) -> BoxFuture<'_, anyhow::Result<Value>> {
        Box::pin(self.run())
    }
}

/// Handle to a `getAppBuilderConfig` hook.
///
/// Cheap to clone. Deserializes from a [`HookSource`].
#[derive(Clone)]
pub enum AppBuilderConfigHook {
    /// Declared in a config file.
    Source(HookSource),
    /// Supplied from code.
    Custom(Arc<dyn AppBuilderConfigSource>),
}

impl fmt::Debug for AppBuilderConfigHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(source) => f.debug_tuple("Source").field(source).finish(),
            Self::Custom(_) => f.write_str("Custom(<hook>)"),
        }
    }
}

impl<'de> Deserialize<'de> for AppBuilderConfigHook {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        HookSource::deserialize(deserializer).map(Self::Source)
    }
}

impl From<HookSource> for AppBuilderConfigHook {
    fn from(source: HookSource) -> Self {
        Self::Source(source)
    }
}

impl AppBuilderConfigHook {
    /// Wrap a custom source.
    pub fn new(source: impl AppBuilderConfigSource + 'static) -> Self {
        Self::Custom(Arc::new(source))
    }

    /// Build a hook from an async closure.
    ///
    /// ```
    /// use kodegen_maker_nsis::maker::AppBuilderConfigHook;
    ///
    /// let hook = AppBuilderConfigHook::from_fn(|| async {
    ///     Ok(serde_json::json!({ "appId": "com.example.app" }))
    /// });
    /// ```
    pub fn from_fn<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<Value>> + Send + 'static,
    {
        Self::new(FnSource(f))
    }

    /// Invoke the hook and enforce the mapping contract.
    ///
    /// Failures surface as [`Error::HookFailed`] unless the source already
    /// raised a specific maker error (e.g. [`Error::HookTimeout`]).
    pub async fn resolve(&self) -> Result<Map<String, Value>> {
        let loaded = match self {
            Self::Source(HookSource::File(source)) => source.load().await,
            Self::Source(HookSource::Command(source)) => source.load().await,
            Self::Custom(source) => source.load().await,
        };

        let value = loaded.map_err(|err| match err.downcast::<Error>() {
            Ok(maker_err) => maker_err,
            Err(other) => Error::HookFailed(other),
        })?;

        match value {
            Value::Object(map) => Ok(map),
            other => Err(Error::HookContract {
                found: json_type_name(&other),
            }),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
