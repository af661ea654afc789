/// `config_struct!`: one declaration per config section
///
/// Each field is written as `name: Type = default`. The macro expands to a
/// struct with public fields, a `Default` impl built from the declared
/// values, serde support and equality (used to compare a loaded section
/// against its defaults).
///
/// # Example
/// ```
/// poolscore::config_struct! {
///     pub struct ExampleConfig {
///         timeout_seconds: u64 = 10,
///         enabled: bool = true,
///     }
/// }
///
/// let cfg: ExampleConfig = toml::from_str("enabled = false").unwrap();
/// assert_eq!(cfg.timeout_seconds, 10);
/// assert_ne!(cfg, ExampleConfig::default());
/// ```
///
/// Keys missing from a TOML section keep their declared default.
#[macro_export]
macro_rules! config_struct {
    (
        $(#[$struct_attr:meta])*
        $vis:vis struct $section:ident {
            $(
                $(#[$attr:meta])*
                $field:ident: $ty:ty = $default:expr
            ),* $(,)?
        }
    ) => {
        $(#[$struct_attr])*
        #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        $vis struct $section {
            $( $(#[$attr])* pub $field: $ty, )*
        }

        impl Default for $section {
            fn default() -> Self {
                Self { $( $field: $default, )* }
            }
        }
    };
}
