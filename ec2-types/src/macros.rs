/// Declares a closed string enum that keeps values it does not recognize.
///
/// The service adds enum members over time, so every enum carries an
/// `Unknown(String)` variant that round-trips the raw wire value.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// A value not known to this version of the crate.
            Unknown(String),
        }

        impl $name {
            /// The wire value of this variant.
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $value,)+
                    $name::Unknown(s) => s.as_str(),
                }
            }

            /// All wire values known to this version of the crate.
            pub fn values() -> &'static [&'static str] {
                &[$($value),+]
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $($value => $name::$variant,)+
                    other => $name::Unknown(other.to_owned()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name::from(s.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($name::from(s))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok($name::from(raw))
            }
        }
    };
}

/// Implements `Display` as the field dump produced by [`crate::display`].
macro_rules! impl_display {
    ($($name:ty),+ $(,)?) => {
        $(
            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    $crate::display::write_fields(f, self)
                }
            }
        )+
    };
}

/// Adds the list setters to a derived builder.
///
/// `field(items)` appends to the list, creating it when unset.
/// `set_field(list)` replaces the list; `None` clears it.
macro_rules! list_setters {
    ($builder:ident { $($field:ident, $setter:ident: $item:ty;)+ }) => {
        impl $builder {
            $(
                pub fn $field<I>(&mut self, items: I) -> &mut Self
                where
                    I: IntoIterator,
                    I::Item: Into<$item>,
                {
                    self.$field
                        .get_or_insert(None)
                        .get_or_insert_with(Vec::new)
                        .extend(items.into_iter().map(Into::into));
                    self
                }

                pub fn $setter(&mut self, items: Option<Vec<$item>>) -> &mut Self {
                    self.$field = Some(items);
                    self
                }
            )+
        }
    };
}

/// Wires a request type to its EC2 action and to [`crate::DryRunSupported`].
macro_rules! dry_run_request {
    ($($name:ty => $action:literal),+ $(,)?) => {
        $(
            impl $crate::request::Ec2Request for $name {
                const ACTION: &'static str = $action;
            }

            impl $crate::request::DryRunSupported for $name {
                fn dry_run(&self) -> Option<bool> {
                    self.dry_run
                }

                fn set_dry_run(&mut self, dry_run: Option<bool>) {
                    self.dry_run = dry_run;
                }
            }
        )+
    };
}

/// Implements [`crate::Paginated`] for requests carrying `next_token` and `max_results`.
macro_rules! paginated_request {
    ($($name:ty),+ $(,)?) => {
        $(
            impl $crate::request::Paginated for $name {
                fn next_token(&self) -> Option<&str> {
                    self.next_token.as_deref()
                }

                fn set_next_token(&mut self, token: Option<String>) {
                    self.next_token = token;
                }

                fn max_results(&self) -> Option<i32> {
                    self.max_results
                }
            }
        )+
    };
}

/// Implements [`crate::PaginatedResponse`] for a response and its item list.
macro_rules! paginated_response {
    ($($name:ty => $items:ident: $item:ty),+ $(,)?) => {
        $(
            impl $crate::request::PaginatedResponse for $name {
                type Item = $item;

                fn next_token(&self) -> Option<&str> {
                    self.next_token.as_deref()
                }

                fn into_items(self) -> Vec<$item> {
                    self.$items.unwrap_or_default()
                }
            }
        )+
    };
}
