// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate derive_new;

#[macro_use]
extern crate log;

extern crate serde;
extern crate serde_json;

extern crate chrono;

extern crate reqwest;

pub mod roster;
pub mod scores;
pub mod balance;
pub mod session;
pub mod api;

/*
    Common error_chain for all of lib to use so the ? operator passes things around real well.

    Add `use ::errors::*;` to the sub-modules to gain access to it.

    Technically you don't want to do this because it hides the reason for an error and you'll want to use a lot of `links` instead of `foreign_links` but this is way easier.
*/
pub mod errors {
    // Create the Error, ErrorKind, ResultExt, and Result types
     error_chain!{
        foreign_links {
            Io(::std::io::Error);
            SerdeJson(::serde_json::Error);
            /* NoneError doesn't like to be implemented. Just use `.ok_or("Nothing")?` instead of only `?` */
            Reqwest(::reqwest::Error);
        }

        errors {
            DuplicateIdentity(identity: String) {
                description("player is already in the roster")
                display("player: {} is already in the roster", identity)
            }
            CapacityExceeded(capacity: usize) {
                description("roster is full")
                display("roster already holds {} players", capacity)
            }
            IndexOutOfRange(index: usize, size: usize) {
                description("no roster entry at that index")
                display("index: {} is outside of roster size: {}", index, size)
            }
            ActionPending(action: String) {
                description("action is already pending")
                display("action: {} is already pending", action)
            }
            EmptyRoster {
                description("roster has no players")
                display("roster has no players to balance")
            }
            UnknownStrategy(token: String) {
                description("unknown balance strategy")
                display("unknown balance strategy: {}", token)
            }
            ProviderLookupFailed(detail: String) {
                description("stats provider lookup failed")
                display("stats provider lookup failed: {}", detail)
            }
            EngineRequestFailed(detail: String) {
                description("balancing engine request failed")
                display("balancing engine request failed: {}", detail)
            }
        }
    }
}
