mod auth_test;
mod helpers;
mod pet_test;
