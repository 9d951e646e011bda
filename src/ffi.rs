//! C ABI surface. both symbols are the same operation as [`crate::next`].

/// stable exported symbol
#[no_mangle]
pub extern "C" fn publisherkit_combine_identifier() -> u64 {
    crate::generator::next()
}

/// name expected by the host-language bridge
#[allow(non_snake_case)]
#[no_mangle]
pub extern "C" fn _newCombineIdentifier() -> u64 {
    publisherkit_combine_identifier()
}
