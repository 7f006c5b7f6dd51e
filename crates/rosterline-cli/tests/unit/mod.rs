mod contacts;
mod phone;
