#![no_std]

mod events;
mod storage;
mod types;
mod validation;


use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};
use storage::*;
pub use types::{DataKey, Error, HealthcareProvider, VaccineRecord};
use validation::{validate_provider_profile, validate_vaccination};

#[contract]
pub struct VaccineRegistry;

/// Fails with `Unauthorized` unless `caller` is the deployment owner.
fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    let owner = read_owner(env).ok_or(Error::Unauthorized)?;
    if *caller != owner {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

#[contractimpl]
impl VaccineRegistry {
    /// Fixes the global authority. Runs once, when the contract is deployed.
    pub fn __constructor(env: Env, owner: Address) {
        write_owner(&env, &owner);
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        read_owner(&env).ok_or(Error::NotFound)
    }

    // -------------------------------------------------------------------
    // Provider registry
    // -------------------------------------------------------------------

    /// Registers the caller as an unapproved healthcare provider.
    pub fn register_provider(
        env: Env,
        provider: Address,
        name: String,
        license: String,
    ) -> Result<(), Error> {
        provider.require_auth();

        validate_provider_profile(&name, &license)?;
        if has_provider(&env, &provider) {
            return Err(Error::AlreadyRegistered);
        }

        let now = env.ledger().timestamp();
        let profile = HealthcareProvider {
            provider_address: provider.clone(),
            provider_name: name.clone(),
            license_number: license.clone(),
            is_approved: false,
            registration_date: now,
        };
        save_provider(&env, &profile);

        events::provider_registered(&env, &provider, &name, &license, now);
        log!(&env, "provider registered", provider);

        Ok(())
    }

    /// Grants write access to a registered provider. There is no inverse.
    pub fn approve_provider(env: Env, authority: Address, provider: Address) -> Result<(), Error> {
        authority.require_auth();
        require_owner(&env, &authority)?;

        let mut profile = load_provider(&env, &provider).ok_or(Error::NotFound)?;
        profile.is_approved = true;
        save_provider(&env, &profile);

        events::provider_approved(&env, &provider, &authority, env.ledger().timestamp());
        log!(&env, "provider approved", provider);

        Ok(())
    }

    pub fn get_provider(env: Env, provider: Address) -> Result<HealthcareProvider, Error> {
        load_provider(&env, &provider).ok_or(Error::NotFound)
    }

    pub fn is_provider_approved(env: Env, provider: Address) -> bool {
        is_approved(&env, &provider)
    }

    // -------------------------------------------------------------------
    // Record store
    // -------------------------------------------------------------------

    /// Appends a verified record on behalf of an approved provider and
    /// returns its id. Reused batch numbers are tracked, not rejected.
    pub fn record_vaccination(
        env: Env,
        provider: Address,
        patient: Address,
        patient_name: String,
        vaccine_name: String,
        manufacturer: String,
        batch_number: String,
        location: String,
    ) -> Result<u64, Error> {
        provider.require_auth();

        if !is_approved(&env, &provider) {
            return Err(Error::Unauthorized);
        }
        validate_vaccination(&env, &patient, &patient_name, &vaccine_name, &batch_number)?;

        let now = env.ledger().timestamp();
        let record_id = next_record_id(&env);
        let record = VaccineRecord {
            record_id,
            patient_address: patient.clone(),
            patient_name,
            vaccine_name: vaccine_name.clone(),
            manufacturer,
            batch_number: batch_number.clone(),
            location,
            vaccination_date: now,
            healthcare_provider: provider.clone(),
            is_verified: true,
            timestamp: now,
        };

        save_record(&env, &record);
        add_patient_record(&env, &patient, record_id);
        mark_batch_used(&env, &batch_number);

        events::vaccine_recorded(&env, record_id, &patient, &vaccine_name, &provider, now);
        log!(&env, "vaccination recorded", record_id, patient);

        Ok(record_id)
    }

    /// Returns the record only while its verification flag is set.
    pub fn verify_vaccine_record(env: Env, record_id: u64) -> Result<VaccineRecord, Error> {
        let record = load_record(&env, record_id).ok_or(Error::NotFound)?;
        if !record.is_verified {
            return Err(Error::NotVerified);
        }
        Ok(record)
    }

    pub fn get_patient_vaccine_records(env: Env, patient: Address) -> Vec<u64> {
        load_patient_records(&env, &patient)
    }

    pub fn get_total_records(env: Env) -> u64 {
        record_count(&env)
    }

    // -------------------------------------------------------------------
    // Batch tracking
    // -------------------------------------------------------------------

    pub fn is_batch_number_used(env: Env, batch_number: String) -> bool {
        is_batch_used(&env, &batch_number)
    }

    // -------------------------------------------------------------------
    // Authority
    // -------------------------------------------------------------------

    /// Overwrites a record's verification flag. The only post-creation
    /// mutation a record ever sees.
    pub fn update_record_verification(
        env: Env,
        authority: Address,
        record_id: u64,
        status: bool,
    ) -> Result<(), Error> {
        authority.require_auth();
        require_owner(&env, &authority)?;

        let mut record = load_record(&env, record_id).ok_or(Error::NotFound)?;
        record.is_verified = status;
        save_record(&env, &record);

        events::record_verified(&env, record_id, &authority, status, env.ledger().timestamp());
        log!(&env, "record verification updated", record_id, status);

        Ok(())
    }
}
