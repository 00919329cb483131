//! Input checks run before any storage write.

use soroban_sdk::{Address, Env, String};

use crate::types::Error;

pub fn require_non_empty(value: &String) -> Result<(), Error> {
    if value.len() == 0 {
        return Err(Error::InvalidInput);
    }
    Ok(())
}

pub fn validate_provider_profile(name: &String, license: &String) -> Result<(), Error> {
    require_non_empty(name)?;
    require_non_empty(license)
}

/// Rejects the registry's own address, which stands in for the null identity.
pub fn validate_patient(env: &Env, patient: &Address) -> Result<(), Error> {
    if *patient == env.current_contract_address() {
        return Err(Error::InvalidInput);
    }
    Ok(())
}

/// `manufacturer` and `location` are deliberately unchecked.
pub fn validate_vaccination(
    env: &Env,
    patient: &Address,
    patient_name: &String,
    vaccine_name: &String,
    batch_number: &String,
) -> Result<(), Error> {
    validate_patient(env, patient)?;
    require_non_empty(patient_name)?;
    require_non_empty(vaccine_name)?;
    require_non_empty(batch_number)
}
