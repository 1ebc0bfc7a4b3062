/// `config_struct!` declares a configuration struct and its defaults in one place.
///
/// It generates:
/// - the struct with public fields
/// - a `Default` impl built from the listed values
/// - serde support with `#[serde(default)]`, so partial TOML files fill in the rest
///
/// # Example
/// ```ignore
/// coinhunter::config_struct! {
///     pub struct FetchConfig {
///         limit_per_chain: usize = 2000,
///         request_pause_ms: u64 = 600,
///     }
/// }
///
/// let cfg = FetchConfig::default();
/// assert_eq!(cfg.limit_per_chain, 2000);
/// ```
#[macro_export]
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_name:ident: $field_type:ty = $default_value:expr
            ),*
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field_name: $field_type,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $(
                        $field_name: $default_value,
                    )*
                }
            }
        }
    };
}
