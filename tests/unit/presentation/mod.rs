mod test_contact;
mod test_serialization;
