use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kantor {
    pub idkantor: String,
    pub namakantor: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleUser {
    pub idrole: String,
    pub namarole: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Status {
    pub idstatus: String,
    pub namastatus: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub nik: String,
    pub nama: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub nohp: String,
    #[serde(default)]
    pub tanggallahir: String,
    #[serde(default)]
    pub fotoselfie: String,
    #[serde(rename = "roleUser", default)]
    pub role_user: Option<RoleUser>,
    #[serde(default)]
    pub kantor: Option<Kantor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aksi {
    pub namaaksi: String,
}

// The status embedded in a transaction only carries its display name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusRef {
    pub namastatus: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransaksiUser {
    pub nik: String,
    #[serde(default)]
    pub nama: String,
    #[serde(default)]
    pub kantor: Option<Kantor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaksi {
    pub idtransaksi: String,
    #[serde(default)]
    pub keterangan: String,
    pub waktutransaksi: String,
    #[serde(default)]
    pub koordinat: String,
    #[serde(default)]
    pub fotobukti: String,
    pub aksi: Aksi,
    #[serde(default)]
    pub status: Option<StatusRef>,
    #[serde(default)]
    pub user: Option<TransaksiUser>,
}

// Request bodies for the mutating endpoints. The backend expects the
// role and office as nested id objects.

#[derive(Debug, Clone, Serialize)]
pub struct RoleId {
    pub idrole: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct KantorId {
    pub idkantor: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub nik: String,
    pub nama: String,
    pub email: String,
    pub password: String,
    pub tanggallahir: String,
    pub nohp: String,
    #[serde(rename = "roleUser")]
    pub role_user: RoleId,
    pub kantor: KantorId,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserUpdate {
    pub nik: String,
    pub nama: String,
    pub email: String,
    pub nohp: String,
    pub tanggallahir: String,
    #[serde(rename = "roleUser")]
    pub role_user: RoleId,
    pub kantor: KantorId,
}

#[derive(Debug, Clone, Serialize)]
pub struct KantorPayload {
    pub namakantor: String,
}
