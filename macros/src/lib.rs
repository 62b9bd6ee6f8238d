use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr, parse_macro_input};

/// Derives the `CommandSet` trait for enums.
///
/// This macro implements `ALL`, `from_name` and `name` for your command enum.
/// Command names default to the lowercased variant name; use
/// `#[command(name = "...")]` on a variant to pick a different one.
///
/// # Example
///
/// ```ignore
/// use site_terminal_macros::CommandSet;
///
/// #[derive(Copy, Clone, PartialEq, Eq, CommandSet)]
/// pub enum MyCommands {
///     Help,
///     Whoami,
///     #[command(name = "sudo")]
///     MakeMeASandwich,
/// }
/// ```
///
/// This generates:
///
/// ```ignore
/// impl CommandSet for MyCommands {
///     const ALL: &'static [Self] = &[Self::Help, Self::Whoami, Self::MakeMeASandwich];
///
///     fn from_name(name: &str) -> Option<Self> {
///         match name {
///             "help" => Some(Self::Help),
///             "whoami" => Some(Self::Whoami),
///             "sudo" => Some(Self::MakeMeASandwich),
///             _ => None,
///         }
///     }
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Help => "help",
///             Self::Whoami => "whoami",
///             Self::MakeMeASandwich => "sudo",
///         }
///     }
/// }
/// ```
///
/// # Requirements
///
/// - The type must be an enum
/// - All variants must be unit variants (no fields)
/// - Command names must be unique
#[proc_macro_derive(CommandSet, attributes(command))]
pub fn derive_command_set(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let variants = match &input.data {
        Data::Enum(data_enum) => &data_enum.variants,
        _ => {
            return syn::Error::new_spanned(&input, "CommandSet can only be derived for enums")
                .to_compile_error()
                .into();
        }
    };

    let mut entries = Vec::with_capacity(variants.len());
    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new_spanned(
                variant,
                "CommandSet can only be derived for enums with unit variants (no fields)",
            )
            .to_compile_error()
            .into();
        }

        let mut command_name = variant.ident.to_string().to_lowercase();
        for attr in variant.attrs.iter().filter(|a| a.path().is_ident("command")) {
            let parsed = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let value: LitStr = meta.value()?.parse()?;
                    command_name = value.value();
                    Ok(())
                } else {
                    Err(meta.error("unsupported command attribute, expected `name`"))
                }
            });
            if let Err(err) = parsed {
                return err.to_compile_error().into();
            }
        }

        if command_name.is_empty() || command_name.contains(' ') {
            return syn::Error::new_spanned(
                variant,
                "command names must be non-empty and contain no spaces",
            )
            .to_compile_error()
            .into();
        }

        if entries.iter().any(|(_, existing)| *existing == command_name) {
            return syn::Error::new_spanned(
                variant,
                format!("duplicate command name `{}`", command_name),
            )
            .to_compile_error()
            .into();
        }

        entries.push((&variant.ident, command_name));
    }

    let all = entries.iter().map(|(ident, _)| quote! { Self::#ident });

    let from_name_arms = entries.iter().map(|(ident, command_name)| {
        quote! {
            #command_name => Some(Self::#ident)
        }
    });

    let name_arms = entries.iter().map(|(ident, command_name)| {
        quote! {
            Self::#ident => #command_name
        }
    });

    let expanded = quote! {
        impl ::site_terminal::command::CommandSet for #name {
            const ALL: &'static [Self] = &[#(#all,)*];

            fn from_name(name: &str) -> Option<Self> {
                match name {
                    #(#from_name_arms,)*
                    _ => None,
                }
            }

            fn name(&self) -> &'static str {
                match self {
                    #(#name_arms,)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}
