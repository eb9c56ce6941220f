//! Validates admission forms read as JSON and prints the result.
//!
//! Run with: cargo run --example admission_form

use desi_text::{mask_identifier, normalize_title, validate_form, Value};

const FORMS: &str = r#"[
  {
    "name": "Rahul Sharma",
    "email": "rahul@gmail.com",
    "phone": "9876543210",
    "age": 20,
    "pincode": "400001",
    "state": "Maharashtra",
    "agreeTerms": true,
    "aadhaar": "123456781234",
    "favouriteFilm": "  the   GREAT gambler "
  },
  {
    "name": "",
    "email": "bad-email",
    "phone": "12345",
    "age": "ten",
    "state": null,
    "agreeTerms": false,
    "aadhaar": "9876",
    "favouriteFilm": "   "
  }
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let forms: Vec<Value> = serde_json::from_str(FORMS)?;

    for form in &forms {
        let aadhaar = form.get("aadhaar").and_then(Value::as_str).unwrap_or_default();
        let film = form.get("favouriteFilm").and_then(Value::as_str).unwrap_or_default();
        println!("aadhaar: {}", mask_identifier(aadhaar));
        println!("film:    {:?}", normalize_title(film));

        match validate_form(form) {
            Some(result) => println!("{}", serde_json::to_string_pretty(&result)?),
            None => println!("not a form"),
        }
        println!();
    }

    Ok(())
}
