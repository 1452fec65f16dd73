use serde::{Deserialize, Serialize};

use crate::aggregator::{
    AuthorInfo, DESCONHECIDO, OBRA_NAO_ENCONTRADA, SEM_NOTA, WorkDetails, WorkLookup,
};

#[derive(Debug, Deserialize)]
pub struct AutorRequest {
    pub nome: String,
}

#[derive(Debug, Deserialize)]
pub struct ObraRequest {
    pub titulo: String,
    pub autor: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AutorResponse {
    pub autor: String,
    pub biografia: String,
    pub imagem: String,
    pub obras_principais: Vec<String>,
}

impl From<AuthorInfo> for AutorResponse {
    fn from(info: AuthorInfo) -> AutorResponse {
        AutorResponse {
            autor: info.nome,
            biografia: info.biografia,
            imagem: info.imagem,
            obras_principais: info.obras_principais,
        }
    }
}

/// Work lookups signal failure by payload shape, always with a 200 status.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ObraResponse {
    Encontrada(ObraEncontrada),
    NaoEncontrada { mensagem: &'static str },
    Erro { erro: String },
}

#[derive(Debug, Serialize)]
pub struct ObraEncontrada {
    pub titulo: String,
    pub autor: String,
    pub ano_publicacao: AnoPublicacao,
    pub nota: Nota,
    pub descricao: String,
    pub capa: Option<String>,
}

/// Publication year on the wire: a number when the catalog knows it,
/// the unknown literal otherwise.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AnoPublicacao {
    Ano(i64),
    Desconhecido(&'static str),
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Nota {
    Valor(f64),
    SemNota(&'static str),
}

impl From<WorkLookup> for ObraResponse {
    fn from(lookup: WorkLookup) -> ObraResponse {
        match lookup {
            WorkLookup::Found(details) => ObraResponse::Encontrada(details.into()),
            WorkLookup::NotFound => ObraResponse::NaoEncontrada {
                mensagem: OBRA_NAO_ENCONTRADA,
            },
            WorkLookup::Error(erro) => ObraResponse::Erro { erro },
        }
    }
}

impl From<WorkDetails> for ObraEncontrada {
    fn from(details: WorkDetails) -> ObraEncontrada {
        ObraEncontrada {
            titulo: details.titulo,
            autor: details.autor,
            ano_publicacao: details
                .ano_publicacao
                .map(AnoPublicacao::Ano)
                .unwrap_or(AnoPublicacao::Desconhecido(DESCONHECIDO)),
            nota: details
                .nota
                .map(Nota::Valor)
                .unwrap_or(Nota::SemNota(SEM_NOTA)),
            descricao: details.descricao,
            capa: details.capa,
        }
    }
}
