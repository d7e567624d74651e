use crate::{
    error::{Error, Result},
    params::{Field, Parameters},
};

/// Checks that every required field carries a value.
///
/// All missing fields are reported at once, in declared order.
pub fn validate(params: &Parameters) -> Result<()> {
    let missing: Vec<Field> = params.missing().filter(Field::is_required).collect();

    if missing.is_empty() {
        return Ok(());
    }

    Err(Error::Validation { missing })
}
