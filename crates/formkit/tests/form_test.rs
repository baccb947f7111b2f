#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Element builder tests.

use formkit::{
    Attributes, DEFAULT_INPUT_TYPE, LabelOptions, SelectOptions, button, checkbox, close, email,
    file, input, label, label_with, open, password, radio, select, submit_button, textarea,
};
use formkit_test_utils::{attrs, gender_options, options};

#[test]
fn test_open() {
    let attributes = attrs(&[("action", "/submit"), ("method", "post")]);
    assert_eq!(open(&attributes), "<form action='/submit' method='post' >");
}

#[test]
fn test_close() {
    assert_eq!(close(), "</form>");
}

#[test]
fn test_input() {
    let attributes = attrs(&[("required", "required")]);
    assert_eq!(
        input("first_name", "text", "John", &attributes),
        "<input type='text' name='first_name' value='John' required='required' >"
    );
}

#[test]
fn test_input_other_type() {
    assert_eq!(
        input("birthday", "date", "", &Attributes::new()),
        "<input type='date' name='birthday' value='' >"
    );
}

#[test]
fn test_select() {
    assert_eq!(
        select("gender", "male", &gender_options(), &Attributes::new()),
        "<select name='gender' ><option value='male' selected>Male</option><option value='female' >Female</option></select>"
    );
}

#[test]
fn test_select_with_attributes_and_numeric_values() {
    let sizes = options(&[("1", "Small"), ("2", "Medium"), ("3", "Large")]);
    assert_eq!(
        select("size", "2.0", &sizes, &attrs(&[("id", "size")])),
        "<select name='size' id='size' ><option value='1' >Small</option><option value='2' selected>Medium</option><option value='3' >Large</option></select>"
    );
}

#[test]
fn test_select_without_options() {
    assert_eq!(
        select("empty", "", &SelectOptions::new(), &Attributes::new()),
        "<select name='empty' ></select>"
    );
}

#[test]
fn test_textarea() {
    assert_eq!(
        textarea("message", "Hello, World!", &Attributes::new()),
        "<textarea name='message' >Hello, World!</textarea>"
    );
}

#[test]
fn test_checkbox() {
    assert_eq!(
        checkbox("agreement", "1", true, &Attributes::new()),
        "<input type='checkbox' name='agreement' value='1' checked >"
    );
}

#[test]
fn test_radio() {
    assert_eq!(
        radio("payment", "credit", true, &Attributes::new()),
        "<input type='radio' name='payment' value='credit' checked >"
    );
}

#[test]
fn test_button() {
    assert_eq!(
        button("reset", "Clear", &attrs(&[("class", "btn")])),
        "<button type='reset' class='btn' >Clear</button>"
    );
    assert_eq!(
        submit_button(&Attributes::new()),
        "<button type='submit' >Submit</button>"
    );
}

#[test]
fn test_file() {
    let attributes = attrs(&[("accept", "image/*")]);
    assert_eq!(
        file("image", &attributes),
        "<input type='file' name='image' accept='image/*' >"
    );
}

#[test]
fn test_password() {
    let attributes = attrs(&[("required", "required")]);
    assert_eq!(
        password("password", &attributes),
        "<input type='password' name='password' required='required' >"
    );
}

#[test]
fn test_email() {
    let attributes = attrs(&[("placeholder", "Enter your email")]);
    assert_eq!(
        email("email", "test@example.com", &attributes),
        "<input type='email' name='email' value='test@example.com' placeholder='Enter your email' >"
    );
}

#[test]
fn test_label() {
    let attributes = attrs(&[("class", "required")]);
    assert_eq!(
        label("first_name", "First Name", &attributes),
        "<label for='first_name' class='required' >First Name</label>"
    );
}

#[test]
fn test_label_with_required_marker() {
    let marker = "<span class='req'>*</span>";
    assert_eq!(
        label_with(
            "first_name",
            "First Name",
            &Attributes::new(),
            &LabelOptions::required_before(marker)
        ),
        "<label for='first_name' ><span class='req'>*</span> First Name</label>"
    );
    assert_eq!(
        label_with(
            "first_name",
            "First Name",
            &Attributes::new(),
            &LabelOptions::required_after(marker)
        ),
        "<label for='first_name' >First Name <span class='req'>*</span></label>"
    );
}

#[test]
fn test_empty_attributes_leave_single_space() {
    let none = Attributes::new();
    assert_eq!(open(&none), "<form >");
    assert_eq!(
        input("a", DEFAULT_INPUT_TYPE, "", &none),
        "<input type='text' name='a' value='' >"
    );
    assert_eq!(textarea("a", "", &none), "<textarea name='a' ></textarea>");
    assert_eq!(file("a", &none), "<input type='file' name='a' >");
    assert_eq!(password("a", &none), "<input type='password' name='a' >");
    assert_eq!(email("a", "", &none), "<input type='email' name='a' value='' >");
    assert_eq!(label("a", "A", &none), "<label for='a' >A</label>");
}

#[test]
fn test_unchecked_inputs_keep_double_space() {
    assert_eq!(
        checkbox("agreement", "1", false, &Attributes::new()),
        "<input type='checkbox' name='agreement' value='1'  >"
    );
    assert_eq!(
        radio("payment", "credit", false, &attrs(&[("id", "pay")])),
        "<input type='radio' name='payment' value='credit'  id='pay' >"
    );
}

#[test]
fn test_values_are_not_escaped() {
    assert_eq!(
        textarea("bio", "<b>O'Brien</b>", &Attributes::new()),
        "<textarea name='bio' ><b>O'Brien</b></textarea>"
    );
}

#[test]
fn test_builders_are_idempotent() {
    let attributes = attrs(&[("class", "x"), ("id", "y")]);
    assert_eq!(
        select("gender", "female", &gender_options(), &attributes),
        select("gender", "female", &gender_options(), &attributes)
    );
    assert_eq!(label("x", "X", &attributes), label("x", "X", &attributes));
}
