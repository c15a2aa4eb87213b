/// Declares a configuration struct together with its [`Schema`](crate::Schema) impl.
///
/// Fields may carry a `#[tag(...)]` attribute with `key = "value"` metadata.
/// The loader reads `env`, the validator reads `validate`. Doc comments go
/// before the `#[tag]` attribute.
///
/// ```
/// dragon_env::config_struct! {
///     #[derive(Debug, Default)]
///     pub struct AppConfig {
///         /// Display name.
///         #[tag(env = "APP_NAME", validate = "required,min=5,max=20")]
///         pub name: String,
///         #[tag(env = "APP_PORT", validate = "min=1024,max=65535")]
///         pub port: u16,
///         pub debug: bool,
///     }
/// }
///
/// let cfg = AppConfig { name: "ValidConfig".into(), port: 8080, debug: false };
/// assert!(dragon_env::validate_struct(&cfg).is_ok());
/// ```
#[macro_export]
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $(#[tag($($key:ident = $tag:literal),* $(,)?)])?
                $fvis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[doc = $doc])*
                $fvis $field: $ty,
            )*
        }

        impl $crate::Schema for $name {
            fn fields(&self) -> ::std::vec::Vec<$crate::schema::Field<'_>> {
                ::std::vec![
                    $(
                        $crate::schema::Field::new(
                            ::std::stringify!($field),
                            &[$($((::std::stringify!($key), $tag),)*)?],
                            &self.$field,
                        ),
                    )*
                ]
            }

            fn fields_mut(&mut self) -> ::std::vec::Vec<$crate::schema::FieldMut<'_>> {
                ::std::vec![
                    $(
                        $crate::schema::FieldMut::new(
                            ::std::stringify!($field),
                            &[$($((::std::stringify!($key), $tag),)*)?],
                            &mut self.$field,
                        ),
                    )*
                ]
            }
        }
    };
}
