//! Compiled-in service catalog and per-service form schemas.
//!
//! The catalog is a fixed data table: adding a service is a new entry here,
//! not a new branch in rendering code. `resolve` is a pure function of this
//! table; an unknown id yields the empty schema and callers render a
//! select-a-service prompt instead of a form.
use serde::Serialize;

/// Input widget requested for a form field.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    Number,
    Select,
    Textarea,
    File,
}

/// One option of a select field, in display order.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Schema of a single extra input field required by a service application.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct FormFieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub options: &'static [SelectOption],
}

/// A service offered through the portal, with its form schema.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub id: i64,
    pub name: &'static str,
    pub fields: &'static [FormFieldSpec],
}

const fn field(key: &'static str, label: &'static str, kind: FieldKind) -> FormFieldSpec {
    FormFieldSpec {
        key,
        label,
        kind,
        required: true,
        options: &[],
    }
}

const fn optional(key: &'static str, label: &'static str, kind: FieldKind) -> FormFieldSpec {
    FormFieldSpec {
        key,
        label,
        kind,
        required: false,
        options: &[],
    }
}

const fn select(
    key: &'static str,
    label: &'static str,
    options: &'static [SelectOption],
) -> FormFieldSpec {
    FormFieldSpec {
        key,
        label,
        kind: FieldKind::Select,
        required: true,
        options,
    }
}

const fn option(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

/// The fixed set of services, ids 1 through 10.
pub static SERVICES: [ServiceDescriptor; 10] = [
    ServiceDescriptor {
        id: 1,
        name: "Characteristic Certificate",
        fields: &[
            field("purpose", "Purpose for Certificate", FieldKind::Text),
            field("referenceOneName", "Reference Person Name", FieldKind::Text),
            field("referenceOneNID", "Reference Person NID", FieldKind::Text),
            field(
                "referenceOneContact",
                "Reference Person Contact",
                FieldKind::Text,
            ),
        ],
    },
    ServiceDescriptor {
        id: 2,
        name: "Marriage Certificate",
        fields: &[
            field("spouseName", "Spouse's Full Name", FieldKind::Text),
            field("spouseNID", "Spouse's NID Number", FieldKind::Text),
            field("marriageDate", "Date of Marriage", FieldKind::Date),
            field("placeOfMarriage", "Place of Marriage", FieldKind::Text),
            field(
                "registrarLicenseNo",
                "Marriage Registrar License No.",
                FieldKind::Text,
            ),
            field(
                "registrationSerialNo",
                "Marriage Register Serial No.",
                FieldKind::Text,
            ),
        ],
    },
    ServiceDescriptor {
        id: 3,
        name: "Disability Certificate",
        fields: &[
            select(
                "disabilityType",
                "Type of Disability",
                &[
                    option("PHYSICAL", "Physical"),
                    option("VISUAL", "Visual"),
                    option("HEARING", "Hearing"),
                    option("SPEECH", "Speech"),
                    option("INTELLECTUAL", "Intellectual"),
                ],
            ),
            field(
                "medicalReportNo",
                "Medical Report Reference No.",
                FieldKind::Text,
            ),
            optional(
                "disabilityDescription",
                "Brief Description of Disability",
                FieldKind::Textarea,
            ),
        ],
    },
    ServiceDescriptor {
        id: 4,
        name: "Death Certificate",
        fields: &[
            field("deceasedName", "Deceased Person's Full Name", FieldKind::Text),
            field(
                "deceasedNID",
                "Deceased Person's NID / Birth Cert. No.",
                FieldKind::Text,
            ),
            field("dateOfDeath", "Date of Death", FieldKind::Date),
            field(
                "placeOfDeath",
                "Place of Death (Hospital/Address)",
                FieldKind::Text,
            ),
            field("causeOfDeath", "Cause of Death", FieldKind::Text),
            field(
                "applicantRelation",
                "Relationship with Deceased",
                FieldKind::Text,
            ),
        ],
    },
    ServiceDescriptor {
        id: 5,
        name: "Citizen Certificate",
        fields: &[
            field("purpose", "Purpose of Certificate", FieldKind::Text),
            field(
                "durationOfStay",
                "Duration of Stay at Permanent Address",
                FieldKind::Text,
            ),
        ],
    },
    ServiceDescriptor {
        id: 6,
        name: "Holding Tax Payment",
        fields: &[
            field("holdingNumber", "Holding Number", FieldKind::Text),
            field("wardNumber", "Ward Number", FieldKind::Number),
            field("assessmentYear", "Assessment Year", FieldKind::Text),
            select(
                "paymentPeriod",
                "Payment Period",
                &[
                    option("Q1", "Q1 (July - September)"),
                    option("Q2", "Q2 (October - December)"),
                    option("Q3", "Q3 (January - March)"),
                    option("Q4", "Q4 (April - June)"),
                ],
            ),
        ],
    },
    ServiceDescriptor {
        id: 7,
        name: "National Health Card",
        fields: &[
            select(
                "bloodGroup",
                "Blood Group",
                &[
                    option("A+", "A+"),
                    option("A-", "A-"),
                    option("B+", "B+"),
                    option("B-", "B-"),
                    option("AB+", "AB+"),
                    option("AB-", "AB-"),
                    option("O+", "O+"),
                    option("O-", "O-"),
                ],
            ),
            field(
                "emergencyContactName",
                "Emergency Contact Name",
                FieldKind::Text,
            ),
            field(
                "emergencyContactPhone",
                "Emergency Contact Phone",
                FieldKind::Text,
            ),
            optional(
                "preExistingConditions",
                "Pre-existing Conditions (optional)",
                FieldKind::Textarea,
            ),
        ],
    },
    ServiceDescriptor {
        id: 8,
        name: "Birth Certificate",
        fields: &[
            field("childsName", "Child's Full Name", FieldKind::Text),
            field("dateOfBirth", "Date of Birth", FieldKind::Date),
            field("placeOfBirth", "Place of Birth (Address)", FieldKind::Text),
            optional(
                "hospitalName",
                "Hospital/Clinic Name (if any)",
                FieldKind::Text,
            ),
            field("fathersName", "Father's Name", FieldKind::Text),
            field("mothersName", "Mother's Name", FieldKind::Text),
        ],
    },
    ServiceDescriptor {
        id: 9,
        name: "Land Ownership Transfer",
        fields: &[
            field("sellerName", "Seller's Full Name", FieldKind::Text),
            field("sellerNID", "Seller's NID", FieldKind::Text),
            field("deedNumber", "Deed (Dalil) Number", FieldKind::Text),
            field(
                "landLocation",
                "Land Location (Mouza, Khatian, Dag No.)",
                FieldKind::Text,
            ),
            field("landArea", "Area of Land (in decimals)", FieldKind::Number),
        ],
    },
    ServiceDescriptor {
        id: 10,
        name: "E-Tax Filing",
        fields: &[
            field(
                "tinNumber",
                "Taxpayer's Identification Number (TIN)",
                FieldKind::Text,
            ),
            field("assessmentYear", "Assessment Year", FieldKind::Text),
            field("taxableIncome", "Total Taxable Income", FieldKind::Number),
            field("taxPaid", "Total Tax Paid", FieldKind::Number),
            optional("paymentChallanNo", "Payment Challan No.", FieldKind::Text),
        ],
    },
];

/// Looks up a service descriptor by id.
pub fn find(service_id: i64) -> Option<&'static ServiceDescriptor> {
    SERVICES.iter().find(|service| service.id == service_id)
}

/// Resolves the ordered extra-field schema for a service. Unknown ids yield
/// the empty schema.
pub fn resolve(service_id: i64) -> &'static [FormFieldSpec] {
    find(service_id).map(|service| service.fields).unwrap_or(&[])
}

/// Display name of a service, with a stable fallback for unknown ids.
pub fn service_name(service_id: i64) -> &'static str {
    find(service_id)
        .map(|service| service.name)
        .unwrap_or("Unknown Service")
}
