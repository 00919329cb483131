use soroban_sdk::{symbol_short, Address, Env, String};

pub fn provider_registered(
    env: &Env,
    provider: &Address,
    name: &String,
    license: &String,
    timestamp: u64,
) {
    env.events().publish(
        (symbol_short!("prov_reg"), provider.clone()),
        (name.clone(), license.clone(), timestamp),
    );
}

pub fn provider_approved(env: &Env, provider: &Address, authority: &Address, timestamp: u64) {
    env.events().publish(
        (symbol_short!("prov_appr"), provider.clone()),
        (authority.clone(), timestamp),
    );
}

pub fn vaccine_recorded(
    env: &Env,
    record_id: u64,
    patient: &Address,
    vaccine_name: &String,
    provider: &Address,
    timestamp: u64,
) {
    env.events().publish(
        (symbol_short!("vax_rec"), record_id, patient.clone()),
        (vaccine_name.clone(), provider.clone(), timestamp),
    );
}

pub fn record_verified(
    env: &Env,
    record_id: u64,
    authority: &Address,
    status: bool,
    timestamp: u64,
) {
    env.events().publish(
        (symbol_short!("rec_ver"), record_id),
        (authority.clone(), status, timestamp),
    );
}
