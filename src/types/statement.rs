//! The fixed statement list, in presentation order

use serde::Serialize;

/// One quiz item the user rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Statement {
    /// Zero-based ordinal position
    pub id: usize,
    pub text: &'static str,
}

impl Statement {
    const fn new(id: usize, text: &'static str) -> Self {
        Self { id, text }
    }

    /// 1-based number shown to the user
    pub fn number(&self) -> usize {
        self.id + 1
    }
}

pub const STATEMENT_COUNT: usize = 30;

pub static STATEMENTS: [Statement; STATEMENT_COUNT] = [
    Statement::new(0, "O governo deve fornecer saúde pública gratuita?"),
    Statement::new(1, "Impostos sobre ricos devem aumentar?"),
    Statement::new(2, "Porte de armas deve ser liberado?"),
    Statement::new(3, "Aborto deve ser legalizado?"),
    Statement::new(4, "Empresas estatais devem ser privatizadas?"),
    Statement::new(5, "Cotas raciais são necessárias?"),
    Statement::new(6, "Reforma da previdência foi necessária?"),
    Statement::new(7, "Brasil deve priorizar países ocidentais?"),
    Statement::new(8, "Maioridade penal deve ser reduzida?"),
    Statement::new(9, "Estado deve intervir menos na economia?"),
    Statement::new(10, "Maconha deve ser legalizada?"),
    Statement::new(11, "Ensino religioso deve ter nas escolas?"),
    Statement::new(12, "Serviço militar deve ser obrigatório?"),
    Statement::new(13, "Sindicatos têm muito poder?"),
    Statement::new(14, "União estável homoafetiva deve ser legal?"),
    Statement::new(15, "Pena de morte deve ser implantada?"),
    Statement::new(16, "Mídia deve ser mais regulada?"),
    Statement::new(17, "Brasil deve sair da ONU?"),
    Statement::new(18, "Escola sem Partido é necessária?"),
    Statement::new(19, "Homeschooling deve ser permitido?"),
    Statement::new(20, "Empresários devem financiar campanhas?"),
    Statement::new(21, "Voto eletrônico é seguro?"),
    Statement::new(22, "Foro privilegiado deve acabar?"),
    Statement::new(23, "Governo deve controlar preços?"),
    Statement::new(24, "Latifúndio deve ser desapropriado?"),
    Statement::new(25, "Royalties do petróleo devem ir para educação?"),
    Statement::new(26, "Pesquisa com células-tronco deve ser liberada?"),
    Statement::new(27, "Copa do Mundo foi boa para o Brasil?"),
    Statement::new(28, "Dilma sofreu impeachment justo?"),
    Statement::new(29, "Lula é inocente?"),
];
