
#[cfg(test)]
mod create_user_tests;

#[cfg(test)]
mod submit_failure_tests;

#[cfg(test)]
mod concurrent_submit_tests;
