// End-to-end tests for the speech client
//
// Every test starts its own wiremock server and points a real client at it,
// so requests go through the reqwest transport exactly as in production.
// Each server verifies its `expect(..)` counts when the test context drops.

mod helpers;
mod test_synthesis;
mod test_token;
mod test_voices;
