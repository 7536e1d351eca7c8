use reqwest::Method;

use crate::models::*;
use super::{found, ClientError, ClinicApiClient};

/// Patient-facing endpoints.
impl ClinicApiClient {
    pub async fn register_patient(&self, body: &PatientRegistration) -> Result<Patient, ClientError> {
        self.execute(self.request(Method::POST, "/patient/register").json(body))
            .await
    }

    pub async fn patient_login(&self, body: &PatientCredentials) -> Result<Patient, ClientError> {
        self.execute(self.request(Method::POST, "/patient/login").json(body))
            .await
    }

    pub async fn patient_profile(&self, patient_id: i64) -> Result<Patient, ClientError> {
        self.execute(self.request(Method::GET, &format!("/patient/{patient_id}/profile")))
            .await
    }

    /// Sessions open for booking, optionally filtered.
    pub async fn list_open_sessions(
        &self,
        query: &OpenSessionQuery,
    ) -> Result<Vec<ClinicSession>, ClientError> {
        self.execute(self.request(Method::GET, "/patient/sessions").query(query))
            .await
    }

    pub async fn list_patient_appointments(
        &self,
        patient_id: i64,
    ) -> Result<Vec<Appointment>, ClientError> {
        self.execute(
            self.request(Method::GET, "/patient/appointments")
                .query(&[("patient_id", patient_id)]),
        )
        .await
    }

    pub async fn create_appointment(
        &self,
        patient_id: i64,
        session_id: i64,
    ) -> Result<AppointmentRecord, ClientError> {
        self.execute(
            self.request(Method::POST, "/patient/appointments")
                .query(&[("patient_id", patient_id)])
                .json(&NewAppointment { session_id }),
        )
        .await
    }

    pub async fn cancel_appointment(
        &self,
        appt_id: i64,
        patient_id: i64,
    ) -> Result<AppointmentRecord, ClientError> {
        self.execute(
            self.request(Method::DELETE, &format!("/patient/appointments/{appt_id}"))
                .query(&[("patient_id", patient_id)]),
        )
        .await
    }

    pub async fn reschedule_appointment(
        &self,
        appt_id: i64,
        patient_id: i64,
        new_session_id: i64,
    ) -> Result<AppointmentRecord, ClientError> {
        self.execute(
            self.request(Method::PATCH, &format!("/patient/appointments/{appt_id}/reschedule"))
                .query(&[("patient_id", patient_id)])
                .json(&RescheduleAppointment { new_session_id }),
        )
        .await
    }

    pub async fn check_in(
        &self,
        appt_id: i64,
        patient_id: i64,
    ) -> Result<AppointmentRecord, ClientError> {
        self.execute(
            self.request(Method::POST, &format!("/patient/appointments/{appt_id}/checkin"))
                .query(&[("patient_id", patient_id)])
                .json(&serde_json::json!({})),
        )
        .await
    }

    /// The full flat history bundle for one patient.
    pub async fn patient_history(&self, patient_id: i64) -> Result<PatientHistory, ClientError> {
        self.execute(
            self.request(Method::GET, "/patient/history")
                .query(&[("patient_id", patient_id)]),
        )
        .await
    }

    pub async fn list_payments(&self, patient_id: i64) -> Result<Vec<Payment>, ClientError> {
        self.execute(
            self.request(Method::GET, "/patient/payments")
                .query(&[("patient_id", patient_id)]),
        )
        .await
    }

    pub async fn pay_online(
        &self,
        payment_id: i64,
        patient_id: i64,
        body: &OnlinePayment,
    ) -> Result<Payment, ClientError> {
        self.execute(
            self.request(Method::POST, &format!("/patient/payments/{payment_id}/pay"))
                .query(&[("patient_id", patient_id)])
                .json(body),
        )
        .await
    }

    /// Empty when the deployment has no department endpoint.
    pub async fn list_departments(&self) -> Result<Vec<Department>, ClientError> {
        found(self.execute(self.request(Method::GET, "/departments")).await)
            .map(Option::unwrap_or_default)
    }

    pub async fn list_department_categories(&self) -> Result<Vec<DepartmentCategory>, ClientError> {
        found(
            self.execute(self.request(Method::GET, "/departments/categories"))
                .await,
        )
        .map(Option::unwrap_or_default)
    }

    pub async fn department_by_name(&self, name: &str) -> Result<Option<Department>, ClientError> {
        found(
            self.execute(
                self.request(Method::GET, "/departments/by-name")
                    .query(&[("name", name)]),
            )
            .await,
        )
    }
}
